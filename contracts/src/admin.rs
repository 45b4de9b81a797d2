//! Admin handover shared by every contract that exposes `transfer-admin`.

use skillchain_ledger::{Args, CallContext, ContractError};
use tracing::info;

/// Replace the contract admin with the first argument.
///
/// Only the current admin may call this; anyone else gets `not_admin`. The new
/// admin is not validated.
pub fn transfer_admin(
    ctx: &mut CallContext<'_>,
    args: &Args<'_>,
    not_admin: impl Into<ContractError>,
) -> Result<(), ContractError> {
    if !ctx.sender_is_admin() {
        return Err(not_admin.into());
    }
    let new_admin = args.principal(0, "new-admin")?;
    info!(contract = %ctx.contract(), from = %ctx.sender(), to = %new_admin, "admin transferred");
    ctx.set_admin(new_admin);
    Ok(())
}
