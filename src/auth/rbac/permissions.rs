//! Capability predicates
//!
//! None of these ever fail; callers turn a `false` into an
//! `AuthorizationDenied` through `ActorContext::require`.

use super::types::{Capability, PrivilegeLevel};

pub fn can_edit_privileges(actor: Option<PrivilegeLevel>) -> bool {
    Capability::EditPrivileges.allows(actor)
}

/// Board and above may edit anyone; a Volunteer may only edit members at
/// their own tier or below.
pub fn can_edit_privilege_for_target(
    actor: Option<PrivilegeLevel>,
    target: PrivilegeLevel,
) -> bool {
    match actor {
        Some(level) if level >= PrivilegeLevel::Board => true,
        Some(PrivilegeLevel::Volunteer) => target <= PrivilegeLevel::Volunteer,
        _ => false,
    }
}

/// Highest level `actor` may hand out, if any
pub fn max_assignable(actor: Option<PrivilegeLevel>) -> Option<PrivilegeLevel> {
    match actor {
        Some(level) if level >= PrivilegeLevel::Board => Some(PrivilegeLevel::It),
        Some(PrivilegeLevel::Volunteer) => Some(PrivilegeLevel::Volunteer),
        _ => None,
    }
}

/// Whether `actor` may set `desired` on a member currently at `target`.
///
/// Without a target (a brand-new record) only the ceiling applies.
pub fn can_assign_privilege(
    actor: Option<PrivilegeLevel>,
    desired: PrivilegeLevel,
    target: Option<PrivilegeLevel>,
) -> bool {
    if let Some(target) = target {
        if !can_edit_privilege_for_target(actor, target) {
            return false;
        }
    }

    max_assignable(actor).is_some_and(|ceiling| desired <= ceiling)
}

/// An actor may lower or keep their own level, never raise it
pub fn can_set_own_privilege(actor: Option<PrivilegeLevel>, desired: PrivilegeLevel) -> bool {
    actor.is_some_and(|level| desired <= level)
}

/// Board and above may create members at any level; anyone else needs an
/// assignable ceiling covering the new member's level.
pub fn can_create_member(actor: Option<PrivilegeLevel>, level: PrivilegeLevel) -> bool {
    match actor {
        Some(actor_level) if actor_level >= PrivilegeLevel::Board => true,
        _ => can_assign_privilege(actor, level, None),
    }
}

pub fn can_delete_members(actor: Option<PrivilegeLevel>) -> bool {
    Capability::DeleteMembers.allows(actor)
}

pub fn can_manage_membership_status(actor: Option<PrivilegeLevel>) -> bool {
    Capability::ManageMembershipStatus.allows(actor)
}

pub fn can_reset_passwords(actor: Option<PrivilegeLevel>) -> bool {
    Capability::ResetPasswords.allows(actor)
}

pub fn can_ban_members(actor: Option<PrivilegeLevel>) -> bool {
    Capability::BanMembers.allows(actor)
}

pub fn can_manage_members(actor: Option<PrivilegeLevel>) -> bool {
    Capability::ManageMembers.allows(actor)
}

pub fn can_view_audit_logs(actor: Option<PrivilegeLevel>) -> bool {
    Capability::ViewAuditLogs.allows(actor)
}

pub fn is_voluntary_or_higher(level: Option<PrivilegeLevel>) -> bool {
    level.is_some_and(|level| level >= PrivilegeLevel::Volunteer)
}

/// A missing flag counts as inactive
pub fn is_membership_active(active: Option<bool>) -> bool {
    active.unwrap_or(false)
}
