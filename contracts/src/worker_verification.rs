//! Worker identity verification.
//!
//! A worker moves through `unregistered → registered → verified`. Workers
//! register themselves and attach documents; the admin verifies documents and
//! workers.

use crate::admin;
use crate::error::WorkerVerificationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use skillchain_ledger::{Args, CallContext, ContractDefinition, ContractError, ReadContext};
use skillchain_types::{BlockHeight, CompositeKey, ContractId, Principal};
use tracing::debug;

pub const WORKERS: &str = "workers";
pub const DOCUMENTS: &str = "verified-documents";

pub static DEFINITION: ContractDefinition = ContractDefinition {
    id: ContractId::WorkerVerification,
    maps: &[WORKERS, DOCUMENTS],
    public: &[
        ("register-worker", register_worker),
        ("add-document", add_document),
        ("verify-document", verify_document),
        ("verify-worker", verify_worker),
        ("transfer-admin", transfer_admin),
    ],
    read_only: &[("is-worker-verified", is_worker_verified)],
};

/// A registered worker, keyed by worker id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Worker {
    pub principal: Principal,
    pub name: String,
    pub verified: bool,
    pub registration_date: BlockHeight,
}

/// A document attached to a worker, keyed by (worker id, document type).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Document {
    pub hash: String,
    pub verified: bool,
    /// Zero until the document is verified.
    pub verification_date: BlockHeight,
}

pub fn worker_key(worker_id: &str) -> CompositeKey {
    CompositeKey::new().field("worker-id", worker_id)
}

pub fn document_key(worker_id: &str, document_type: &str) -> CompositeKey {
    CompositeKey::new()
        .field("worker-id", worker_id)
        .field("document-type", document_type)
}

/// `register-worker(worker-id, name)`
///
/// Re-registering an unverified worker overwrites the record, including the
/// owning principal. Only a verified worker is protected.
fn register_worker(ctx: &mut CallContext<'_>, args: &Args<'_>) -> Result<(), ContractError> {
    let worker_id = args.text(0, "worker-id")?;
    let name = args.text(1, "name")?;
    let key = worker_key(worker_id);

    if let Some(existing) = ctx.get::<Worker>(WORKERS, &key)? {
        if existing.verified {
            return Err(WorkerVerificationError::AlreadyVerified.into());
        }
    }

    let worker = Worker {
        principal: ctx.sender().clone(),
        name: name.to_string(),
        verified: false,
        registration_date: ctx.block_height(),
    };
    ctx.put(WORKERS, &key, &worker)?;
    debug!(worker_id, "worker registered");
    Ok(())
}

/// `add-document(worker-id, document-type, document-hash)`
fn add_document(ctx: &mut CallContext<'_>, args: &Args<'_>) -> Result<(), ContractError> {
    let worker_id = args.text(0, "worker-id")?;
    let document_type = args.text(1, "document-type")?;
    let hash = args.text(2, "document-hash")?;

    let worker = ctx
        .get::<Worker>(WORKERS, &worker_key(worker_id))?
        .ok_or(WorkerVerificationError::WorkerNotFound)?;
    if &worker.principal != ctx.sender() {
        return Err(WorkerVerificationError::NotWorkerOwner.into());
    }

    let document = Document {
        hash: hash.to_string(),
        verified: false,
        verification_date: BlockHeight::ZERO,
    };
    ctx.put(DOCUMENTS, &document_key(worker_id, document_type), &document)
}

/// `verify-document(worker-id, document-type)`
fn verify_document(ctx: &mut CallContext<'_>, args: &Args<'_>) -> Result<(), ContractError> {
    let worker_id = args.text(0, "worker-id")?;
    let document_type = args.text(1, "document-type")?;
    let key = document_key(worker_id, document_type);

    let mut document = ctx
        .get::<Document>(DOCUMENTS, &key)?
        .ok_or(WorkerVerificationError::DocumentNotFound)?;
    if !ctx.sender_is_admin() {
        return Err(WorkerVerificationError::NotAdmin.into());
    }

    document.verified = true;
    document.verification_date = ctx.block_height();
    ctx.put(DOCUMENTS, &key, &document)
}

/// `verify-worker(worker-id)`
fn verify_worker(ctx: &mut CallContext<'_>, args: &Args<'_>) -> Result<(), ContractError> {
    let worker_id = args.text(0, "worker-id")?;
    let key = worker_key(worker_id);

    let mut worker = ctx
        .get::<Worker>(WORKERS, &key)?
        .ok_or(WorkerVerificationError::WorkerNotFound)?;
    if !ctx.sender_is_admin() {
        return Err(WorkerVerificationError::NotAdmin.into());
    }

    worker.verified = true;
    ctx.put(WORKERS, &key, &worker)?;
    debug!(worker_id, "worker verified");
    Ok(())
}

fn transfer_admin(ctx: &mut CallContext<'_>, args: &Args<'_>) -> Result<(), ContractError> {
    admin::transfer_admin(ctx, args, WorkerVerificationError::NotAdmin)
}

/// `is-worker-verified(worker-id)`: `false` for unknown workers.
fn is_worker_verified(ctx: &ReadContext<'_>, args: &Args<'_>) -> Result<Value, ContractError> {
    let worker_id = args.text(0, "worker-id")?;
    let verified = ctx
        .get::<Worker>(WORKERS, &worker_key(worker_id))?
        .is_some_and(|w| w.verified);
    Ok(Value::Bool(verified))
}
