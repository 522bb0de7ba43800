//! Channel-related types and state.

use std::collections::{BTreeMap, HashSet};

use crate::error::ChannelError;

use super::uid::ConnId;

/// Channel topic with metadata.
#[derive(Debug, Clone)]
pub struct Topic {
    pub text: String,
    pub set_by: String,
    pub set_at: i64,
}

/// Member modes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemberModes {
    pub op: bool, // +o (@)
}

impl MemberModes {
    /// NAMES/WHO prefix for this member.
    pub fn prefix_char(&self) -> Option<char> {
        self.op.then_some('@')
    }
}

/// Channel mode flags and parameters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChannelModes {
    pub invite_only: bool,  // +i
    pub topic_locked: bool, // +t
    pub key: Option<String>, // +k
    pub limit: Option<usize>, // +l
}

/// A live channel. Exists only while it has at least one member.
#[derive(Debug)]
pub struct Channel {
    /// Name as first created (case preserved).
    pub name: String,
    pub topic: Option<Topic>,
    pub modes: ChannelModes,
    pub created_at: i64,
    members: BTreeMap<ConnId, MemberModes>,
    invited: HashSet<ConnId>,
}

impl Channel {
    /// Create a channel whose creator is its sole member and operator.
    pub fn new(name: impl Into<String>, creator: ConnId) -> Self {
        let mut members = BTreeMap::new();
        members.insert(creator, MemberModes { op: true });
        Self {
            name: name.into(),
            topic: None,
            modes: ChannelModes::default(),
            created_at: chrono::Utc::now().timestamp(),
            members,
            invited: HashSet::new(),
        }
    }

    pub fn is_member(&self, id: ConnId) -> bool {
        self.members.contains_key(&id)
    }

    /// Operator status counts only while the session is a member.
    pub fn is_op(&self, id: ConnId) -> bool {
        self.members.get(&id).is_some_and(|m| m.op)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> impl Iterator<Item = (ConnId, MemberModes)> + '_ {
        self.members.iter().map(|(id, modes)| (*id, *modes))
    }

    pub fn member_ids(&self) -> impl Iterator<Item = ConnId> + '_ {
        self.members.keys().copied()
    }

    pub fn is_invited(&self, id: ConnId) -> bool {
        self.invited.contains(&id)
    }

    /// Join eligibility, checked in a fixed order: invite, then key, then
    /// limit. Only the first failure is reported.
    pub fn can_join(&self, id: ConnId, key: Option<&str>) -> Result<(), ChannelError> {
        if self.modes.invite_only && !self.is_invited(id) {
            return Err(ChannelError::InviteOnlyChan);
        }
        if let Some(expected) = &self.modes.key {
            if key != Some(expected.as_str()) {
                return Err(ChannelError::BadChannelKey);
            }
        }
        if let Some(limit) = self.modes.limit {
            if self.members.len() >= limit {
                return Err(ChannelError::ChannelIsFull);
            }
        }
        Ok(())
    }

    /// Add a plain member and consume any pending invite.
    pub fn add_member(&mut self, id: ConnId) {
        self.invited.remove(&id);
        self.members.entry(id).or_default();
    }

    /// Remove a member along with its operator bit and invite.
    pub fn remove_member(&mut self, id: ConnId) -> bool {
        self.invited.remove(&id);
        self.members.remove(&id).is_some()
    }

    pub fn invite(&mut self, id: ConnId) {
        self.invited.insert(id);
    }

    /// Grant or revoke operator status. Returns whether anything changed;
    /// non-members are rejected.
    pub fn set_op(&mut self, id: ConnId, op: bool) -> Result<bool, ChannelError> {
        let Some(member) = self.members.get_mut(&id) else {
            return Err(ChannelError::NotOnChannel);
        };
        let changed = member.op != op;
        member.op = op;
        Ok(changed)
    }

    /// `+<letters>` plus parameters. The key is shown only when
    /// `show_key` is set.
    pub fn mode_string(&self, show_key: bool) -> (String, Vec<String>) {
        let mut modes = String::from("+");
        let mut params = Vec::new();
        if self.modes.invite_only {
            modes.push('i');
        }
        if self.modes.topic_locked {
            modes.push('t');
        }
        if let Some(key) = &self.modes.key {
            modes.push('k');
            params.push(if show_key { key.clone() } else { "*".to_string() });
        }
        if let Some(limit) = self.modes.limit {
            modes.push('l');
            params.push(limit.to_string());
        }
        (modes, params)
    }
}
