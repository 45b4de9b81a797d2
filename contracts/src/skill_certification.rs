//! Skill catalogue and worker certifications.

use crate::admin;
use crate::error::SkillCertificationError;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use skillchain_ledger::{Args, CallContext, ContractDefinition, ContractError, ReadContext};
use skillchain_store::StoreError;
use skillchain_types::{BlockHeight, CompositeKey, ContractId, Principal};
use std::ops::RangeInclusive;
use tracing::debug;

pub const SKILLS: &str = "skills";
pub const WORKER_SKILLS: &str = "worker-skills";

/// Valid certification levels.
pub const LEVELS: RangeInclusive<u8> = 1..=5;

pub static DEFINITION: ContractDefinition = ContractDefinition {
    id: ContractId::SkillCertification,
    maps: &[SKILLS, WORKER_SKILLS],
    public: &[
        ("create-skill", create_skill),
        ("certify-skill", certify_skill),
        ("transfer-admin", transfer_admin),
    ],
    read_only: &[
        ("is-skill-valid", is_skill_valid),
        ("get-skill-details", get_skill_details),
    ],
};

/// A catalogue entry, keyed by skill id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub created_at: BlockHeight,
}

/// A worker's certification in a skill, keyed by (worker id, skill id).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Certification {
    pub certified_by: Principal,
    pub certification_date: BlockHeight,
    /// `None` never expires.
    pub expiration_date: Option<BlockHeight>,
    pub level: u8,
    pub proof_hash: Option<String>,
}

impl Certification {
    /// Whether the certification is still valid at `height`.
    ///
    /// A certification expires at its expiration height, not after it.
    pub fn is_valid_at(&self, height: BlockHeight) -> bool {
        self.expiration_date
            .map_or(true, |expires| height.is_before(expires))
    }
}

pub fn skill_key(skill_id: &str) -> CompositeKey {
    CompositeKey::new().field("skill-id", skill_id)
}

pub fn certification_key(worker_id: &str, skill_id: &str) -> CompositeKey {
    CompositeKey::new()
        .field("worker-id", worker_id)
        .field("skill-id", skill_id)
}

/// `create-skill(skill-id, name, category)`
fn create_skill(ctx: &mut CallContext<'_>, args: &Args<'_>) -> Result<(), ContractError> {
    if !ctx.sender_is_admin() {
        return Err(SkillCertificationError::NotAdmin.into());
    }
    let skill_id = args.text(0, "skill-id")?;
    let name = args.text(1, "name")?;
    let category = args.text(2, "category")?;
    let key = skill_key(skill_id);

    if ctx.contains(SKILLS, &key)? {
        return Err(SkillCertificationError::SkillExists.into());
    }

    let skill = Skill {
        name: name.to_string(),
        category: category.to_string(),
        created_at: ctx.block_height(),
    };
    ctx.put(SKILLS, &key, &skill)?;
    debug!(skill_id, "skill created");
    Ok(())
}

/// `certify-skill(worker-id, skill-id, level, expiration-date?, proof-hash?)`
///
/// Re-certifying a worker in the same skill overwrites the previous record.
fn certify_skill(ctx: &mut CallContext<'_>, args: &Args<'_>) -> Result<(), ContractError> {
    if !ctx.sender_is_admin() {
        return Err(SkillCertificationError::NotAdmin.into());
    }
    let worker_id = args.text(0, "worker-id")?;
    let skill_id = args.text(1, "skill-id")?;
    let level = args.number(2, "level")?;
    let expiration_date = args.optional_height(3, "expiration-date")?;
    let proof_hash = args.optional_text(4, "proof-hash")?;

    if !ctx.contains(SKILLS, &skill_key(skill_id))? {
        return Err(SkillCertificationError::SkillNotFound.into());
    }
    let level = level_from(level).ok_or(SkillCertificationError::InvalidLevel)?;

    let certification = Certification {
        certified_by: ctx.sender().clone(),
        certification_date: ctx.block_height(),
        expiration_date,
        level,
        proof_hash,
    };
    ctx.put(
        WORKER_SKILLS,
        &certification_key(worker_id, skill_id),
        &certification,
    )?;
    debug!(worker_id, skill_id, level, "skill certified");
    Ok(())
}

/// The level `raw` denotes, if it is a whole number within [`LEVELS`].
fn level_from(raw: &Number) -> Option<u8> {
    let whole = match raw.as_u64() {
        Some(n) => n,
        None => raw.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0)? as u64,
    };
    u8::try_from(whole).ok().filter(|level| LEVELS.contains(level))
}

fn transfer_admin(ctx: &mut CallContext<'_>, args: &Args<'_>) -> Result<(), ContractError> {
    admin::transfer_admin(ctx, args, SkillCertificationError::NotAdminForTransfer)
}

/// `is-skill-valid(worker-id, skill-id)`: `false` without a certification.
fn is_skill_valid(ctx: &ReadContext<'_>, args: &Args<'_>) -> Result<Value, ContractError> {
    let worker_id = args.text(0, "worker-id")?;
    let skill_id = args.text(1, "skill-id")?;
    let valid = ctx
        .get::<Certification>(WORKER_SKILLS, &certification_key(worker_id, skill_id))?
        .is_some_and(|cert| cert.is_valid_at(ctx.block_height()));
    Ok(Value::Bool(valid))
}

/// `get-skill-details(skill-id)`: the skill record, or `null`.
fn get_skill_details(ctx: &ReadContext<'_>, args: &Args<'_>) -> Result<Value, ContractError> {
    let skill_id = args.text(0, "skill-id")?;
    match ctx.get::<Skill>(SKILLS, &skill_key(skill_id))? {
        Some(skill) => serde_json::to_value(skill)
            .map_err(|e| StoreError::Serialization(e.to_string()).into()),
        None => Ok(Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(expiration_date: Option<u64>) -> Certification {
        Certification {
            certified_by: Principal::new("SP1ADMIN"),
            certification_date: BlockHeight::new(1),
            expiration_date: expiration_date.map(BlockHeight::new),
            level: 3,
            proof_hash: None,
        }
    }

    #[test]
    fn non_expiring_is_always_valid() {
        assert!(cert(None).is_valid_at(BlockHeight::new(u64::MAX)));
    }

    #[test]
    fn expires_exactly_at_expiration_height() {
        let c = cert(Some(10));
        assert!(c.is_valid_at(BlockHeight::new(9)));
        assert!(!c.is_valid_at(BlockHeight::new(10)));
        assert!(!c.is_valid_at(BlockHeight::new(11)));
    }

    #[test]
    fn optional_fields_serialize_as_null() {
        let value = serde_json::to_value(cert(None)).unwrap();
        assert_eq!(value["expiration-date"], Value::Null);
        assert_eq!(value["proof-hash"], Value::Null);
        assert_eq!(value["level"], 3);
    }

    #[test]
    fn level_accepts_whole_numbers_in_range() {
        let level = |v: Value| match v {
            Value::Number(n) => level_from(&n),
            _ => None,
        };
        assert_eq!(level(serde_json::json!(1)), Some(1));
        assert_eq!(level(serde_json::json!(5.0)), Some(5));
        assert_eq!(level(serde_json::json!(0)), None);
        assert_eq!(level(serde_json::json!(-2)), None);
        assert_eq!(level(serde_json::json!(2.5)), None);
        assert_eq!(level(serde_json::json!(u64::MAX)), None);
        assert_eq!(level(serde_json::json!(-1e300)), None);
    }
}
