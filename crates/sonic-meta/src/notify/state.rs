//! Port, queue and switch state notifications.

use crate::engine::MetaContext;
use log::{debug, error, warn};
use sonic_sai::{
    MetaKey, PortOperStatusNotification, QueueDeadlockNotification, SaiObjectId, SaiObjectType,
    SwitchOperStatus,
};

impl MetaContext<'_> {
    pub(crate) fn process_port_state_change(&mut self, data: &PortOperStatusNotification) {
        let object_type = self.query.object_type_query(data.port_id);

        if !matches!(
            object_type,
            SaiObjectType::Port | SaiObjectType::BridgePort | SaiObjectType::Lag
        ) {
            error!(
                "port state change for {} of type {}, expected port, bridge port or lag",
                data.port_id, object_type
            );
            return;
        }

        self.snoop_oid(data.port_id);

        match data.status() {
            Some(status) => debug!("{} is {}", data.port_id, status),
            None => warn!("{} reported unknown oper status {}", data.port_id, data.port_state),
        }
    }

    pub(crate) fn process_queue_deadlock(&mut self, data: &QueueDeadlockNotification) {
        let object_type = self.query.object_type_query(data.queue_id);

        if object_type != SaiObjectType::Queue {
            error!(
                "pfc deadlock notification for {} of type {}, expected queue",
                data.queue_id, object_type
            );
            return;
        }

        self.snoop_oid(data.queue_id);

        match data.event() {
            Some(event) => debug!("{}: {}", data.queue_id, event),
            None => warn!("{} reported unknown pfc deadlock event {}", data.queue_id, data.event),
        }
    }

    /// Returns true if `switch_id` names a switch the mirror knows.
    fn check_notified_switch(&self, switch_id: SaiObjectId) -> bool {
        let object_type = self.query.object_type_query(switch_id);

        if object_type != SaiObjectType::Switch {
            warn!("{} is {}, expected switch", switch_id, object_type);
        }

        if !self
            .state
            .objects
            .object_exists(&MetaKey::oid(SaiObjectType::Switch, switch_id))
        {
            error!("switch {} does not exist", switch_id);
            return false;
        }

        true
    }

    pub(crate) fn process_switch_state_change(&self, switch_id: SaiObjectId, status: i32) {
        if !self.check_notified_switch(switch_id) {
            return;
        }

        match SwitchOperStatus::from_raw(status) {
            Some(status) => debug!("switch {} is {}", switch_id, status),
            None => warn!("switch {} reported unknown oper status {}", switch_id, status),
        }
    }

    pub(crate) fn process_switch_shutdown_request(&self, switch_id: SaiObjectId) {
        if self.check_notified_switch(switch_id) {
            warn!("switch {} requested shutdown", switch_id);
        }
    }
}
