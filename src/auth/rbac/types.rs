//! Privilege lattice type definitions

use crate::utils::error::AdminError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative rank of a member, stored as `privilege_type` (1-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum PrivilegeLevel {
    Member = 1,
    Volunteer = 2,
    GroupLeader = 3,
    Board = 4,
    It = 5,
}

impl PrivilegeLevel {
    /// All levels, lowest first
    pub const ALL: [PrivilegeLevel; 5] = [
        PrivilegeLevel::Member,
        PrivilegeLevel::Volunteer,
        PrivilegeLevel::GroupLeader,
        PrivilegeLevel::Board,
        PrivilegeLevel::It,
    ];

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for PrivilegeLevel {
    type Error = AdminError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PrivilegeLevel::Member),
            2 => Ok(PrivilegeLevel::Volunteer),
            3 => Ok(PrivilegeLevel::GroupLeader),
            4 => Ok(PrivilegeLevel::Board),
            5 => Ok(PrivilegeLevel::It),
            other => Err(AdminError::malformed(format!(
                "privilege_type {} is outside 1-5",
                other
            ))),
        }
    }
}

impl From<PrivilegeLevel> for i32 {
    fn from(level: PrivilegeLevel) -> Self {
        level.as_i32()
    }
}

impl fmt::Display for PrivilegeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivilegeLevel::Member => write!(f, "member"),
            PrivilegeLevel::Volunteer => write!(f, "volunteer"),
            PrivilegeLevel::GroupLeader => write!(f, "group_leader"),
            PrivilegeLevel::Board => write!(f, "board"),
            PrivilegeLevel::It => write!(f, "it"),
        }
    }
}

impl FromStr for PrivilegeLevel {
    type Err = AdminError;

    /// Accepts either the level name or its integer rank
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "member" => Ok(PrivilegeLevel::Member),
            "volunteer" => Ok(PrivilegeLevel::Volunteer),
            "group_leader" | "groupleader" => Ok(PrivilegeLevel::GroupLeader),
            "board" => Ok(PrivilegeLevel::Board),
            "it" => Ok(PrivilegeLevel::It),
            other => other
                .parse::<i32>()
                .map_err(|_| AdminError::validation(format!("Invalid privilege level: {}", s)))
                .and_then(|rank| {
                    PrivilegeLevel::try_from(rank).map_err(|_| {
                        AdminError::validation(format!("Invalid privilege level: {}", s))
                    })
                }),
        }
    }
}

/// Fixed-threshold capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    EditPrivileges,
    DeleteMembers,
    ManageMembershipStatus,
    ResetPasswords,
    BanMembers,
    ManageMembers,
    ViewAuditLogs,
    ViewMembers,
    PrintCards,
}

impl Capability {
    /// Lowest level holding this capability
    pub fn min_level(self) -> PrivilegeLevel {
        match self {
            Capability::EditPrivileges | Capability::ViewMembers | Capability::PrintCards => {
                PrivilegeLevel::Volunteer
            }
            Capability::DeleteMembers
            | Capability::ManageMembershipStatus
            | Capability::BanMembers
            | Capability::ManageMembers
            | Capability::ViewAuditLogs => PrivilegeLevel::Board,
            Capability::ResetPasswords => PrivilegeLevel::It,
        }
    }

    /// Whether an actor at `actor` holds this capability
    pub fn allows(self, actor: Option<PrivilegeLevel>) -> bool {
        actor.is_some_and(|level| level >= self.min_level())
    }

    /// Action phrase used in denial messages
    pub fn action(self) -> &'static str {
        match self {
            Capability::EditPrivileges => "edit privileges",
            Capability::DeleteMembers => "delete members",
            Capability::ManageMembershipStatus => "manage membership status",
            Capability::ResetPasswords => "reset passwords",
            Capability::BanMembers => "ban members",
            Capability::ManageMembers => "manage members",
            Capability::ViewAuditLogs => "view audit logs",
            Capability::ViewMembers => "view members",
            Capability::PrintCards => "print membership cards",
        }
    }
}
