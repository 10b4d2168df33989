use crate::model::RecordKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

/// One line of transient feedback. A newer message replaces the older one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Failure,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.tone == Tone::Failure
    }

    pub fn logged_in() -> Self {
        Self::success("Successfully logged in!")
    }

    pub fn login_error() -> Self {
        Self::failure("Login error!")
    }

    pub fn registration_error() -> Self {
        Self::failure("Registration error!")
    }

    pub fn logout_error() -> Self {
        Self::failure("Logout error!")
    }

    /// The stored token was refused when the management screen opened.
    pub fn session_expired() -> Self {
        Self::failure("Session expired, please log in again.")
    }

    pub fn get_error() -> Self {
        Self::failure("Get error!")
    }

    pub fn created(kind: RecordKind) -> Self {
        Self::success(format!("Created in {}!", kind.label()))
    }

    pub fn updated(kind: RecordKind) -> Self {
        Self::success(format!("Updated in {}!", kind.label()))
    }

    pub fn deleted(kind: RecordKind) -> Self {
        Self::success(format!("Deleted in {}!", kind.label()))
    }

    pub fn create_error() -> Self {
        Self::failure("Create error!")
    }

    pub fn update_error() -> Self {
        Self::failure("Update error!")
    }

    pub fn delete_error() -> Self {
        Self::failure("Delete error!")
    }
}

/// Latest message per panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelStatus {
    slots: [Option<StatusMessage>; 3],
}

impl PanelStatus {
    pub fn get(&self, kind: RecordKind) -> Option<&StatusMessage> {
        self.slots[index(kind)].as_ref()
    }

    pub fn set(&mut self, kind: RecordKind, message: StatusMessage) {
        self.slots[index(kind)] = Some(message);
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }
}

fn index(kind: RecordKind) -> usize {
    match kind {
        RecordKind::Segment => 0,
        RecordKind::Brand => 1,
        RecordKind::Vehicle => 2,
    }
}
