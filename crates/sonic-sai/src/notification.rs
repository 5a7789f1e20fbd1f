//! Switch notification payloads.
//!
//! Notifications come from the device, not from a validated client call, so
//! enum-valued fields are kept as raw `i32` and decoded on demand: an
//! unknown value must be reportable rather than unrepresentable.

use crate::attr::{Attribute, SaiAttrId};
use crate::entry::FdbEntry;
use crate::types::SaiObjectId;
use std::fmt;

macro_rules! raw_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:literal, $text:literal;)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub fn from_raw(raw: i32) -> Option<Self> {
                match raw {
                    $($value => Some($name::$variant),)*
                    _ => None,
                }
            }

            pub const fn as_raw(&self) -> i32 {
                match self {
                    $($name::$variant => $value,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($name::$variant => f.write_str($text),)*
                }
            }
        }
    };
}

raw_enum! {
    /// `sai_fdb_event_t`
    FdbEventType {
        Learned = 0, "SAI_FDB_EVENT_LEARNED";
        Aged = 1, "SAI_FDB_EVENT_AGED";
        Moved = 2, "SAI_FDB_EVENT_MOVE";
        Flushed = 3, "SAI_FDB_EVENT_FLUSHED";
    }
}

raw_enum! {
    /// `sai_port_oper_status_t`
    PortOperStatus {
        Unknown = 0, "SAI_PORT_OPER_STATUS_UNKNOWN";
        Up = 1, "SAI_PORT_OPER_STATUS_UP";
        Down = 2, "SAI_PORT_OPER_STATUS_DOWN";
        Testing = 3, "SAI_PORT_OPER_STATUS_TESTING";
        NotPresent = 4, "SAI_PORT_OPER_STATUS_NOT_PRESENT";
    }
}

raw_enum! {
    /// `sai_switch_oper_status_t`
    SwitchOperStatus {
        Unknown = 0, "SAI_SWITCH_OPER_STATUS_UNKNOWN";
        Up = 1, "SAI_SWITCH_OPER_STATUS_UP";
        Down = 2, "SAI_SWITCH_OPER_STATUS_DOWN";
        Failed = 3, "SAI_SWITCH_OPER_STATUS_FAILED";
    }
}

raw_enum! {
    /// `sai_queue_pfc_deadlock_event_type_t`
    QueuePfcDeadlockEvent {
        Detected = 0, "SAI_QUEUE_PFC_DEADLOCK_EVENT_TYPE_DETECTED";
        Recovered = 1, "SAI_QUEUE_PFC_DEADLOCK_EVENT_TYPE_RECOVERED";
    }
}

/// `SAI_FDB_ENTRY_ATTR_TYPE`
pub const FDB_ENTRY_ATTR_TYPE: SaiAttrId = 0;
/// `SAI_FDB_ENTRY_ATTR_BRIDGE_PORT_ID`
pub const FDB_ENTRY_ATTR_BRIDGE_PORT_ID: SaiAttrId = 3;

/// `SAI_FDB_ENTRY_TYPE_DYNAMIC`
pub const FDB_ENTRY_TYPE_DYNAMIC: i32 = 0;
/// `SAI_FDB_ENTRY_TYPE_STATIC`
pub const FDB_ENTRY_TYPE_STATIC: i32 = 1;

/// One FDB event of a notification batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FdbEventData {
    pub event_type: i32,
    pub fdb_entry: FdbEntry,
    pub attrs: Vec<Attribute>,
}

impl FdbEventData {
    pub fn new(event_type: FdbEventType, fdb_entry: FdbEntry, attrs: Vec<Attribute>) -> Self {
        Self {
            event_type: event_type.as_raw(),
            fdb_entry,
            attrs,
        }
    }

    pub fn event(&self) -> Option<FdbEventType> {
        FdbEventType::from_raw(self.event_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortOperStatusNotification {
    pub port_id: SaiObjectId,
    pub port_state: i32,
}

impl PortOperStatusNotification {
    pub fn new(port_id: SaiObjectId, port_state: PortOperStatus) -> Self {
        Self {
            port_id,
            port_state: port_state.as_raw(),
        }
    }

    pub fn status(&self) -> Option<PortOperStatus> {
        PortOperStatus::from_raw(self.port_state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueDeadlockNotification {
    pub queue_id: SaiObjectId,
    pub event: i32,
}

impl QueueDeadlockNotification {
    pub fn new(queue_id: SaiObjectId, event: QueuePfcDeadlockEvent) -> Self {
        Self {
            queue_id,
            event: event.as_raw(),
        }
    }

    pub fn event(&self) -> Option<QueuePfcDeadlockEvent> {
        QueuePfcDeadlockEvent::from_raw(self.event)
    }
}
