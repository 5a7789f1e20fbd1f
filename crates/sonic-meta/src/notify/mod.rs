//! Notification reconciler.
//!
//! Device notifications are folded into the mirror under the same lock as
//! the validated operations. Nothing here returns an error: the device has
//! already acted, so every anomaly is logged and the event skipped.

mod fdb;
mod state;

use crate::engine::Meta;
use sonic_sai::{
    FdbEventData, PortOperStatusNotification, QueueDeadlockNotification, SaiObjectId,
};

impl Meta {
    /// Applies a batch of FDB events in order.
    pub fn on_fdb_event(&self, events: &[FdbEventData]) {
        self.with_context(|ctx| {
            for event in events {
                ctx.process_fdb_event(event);
            }
        });
    }

    pub fn on_port_state_change(&self, notifications: &[PortOperStatusNotification]) {
        self.with_context(|ctx| {
            for notification in notifications {
                ctx.process_port_state_change(notification);
            }
        });
    }

    pub fn on_queue_pfc_deadlock(&self, notifications: &[QueueDeadlockNotification]) {
        self.with_context(|ctx| {
            for notification in notifications {
                ctx.process_queue_deadlock(notification);
            }
        });
    }

    pub fn on_switch_state_change(&self, switch_id: SaiObjectId, switch_oper_status: i32) {
        self.with_context(|ctx| ctx.process_switch_state_change(switch_id, switch_oper_status));
    }

    pub fn on_switch_shutdown_request(&self, switch_id: SaiObjectId) {
        self.with_context(|ctx| ctx.process_switch_shutdown_request(switch_id));
    }
}
