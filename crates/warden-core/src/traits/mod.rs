//! Collaborator traits (ports) - the seams between the core and the platform

mod collaborators;

pub use collaborators::{
    AuditEntry, AuditLogger, AuditTarget, CollaboratorResult, ModerationExecutor,
};
