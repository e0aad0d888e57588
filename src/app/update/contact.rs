use super::super::messages::ContactField;
use super::super::state::App;
use super::Effect;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_contact_field_changed(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.contact.name = value,
            ContactField::Email => self.contact.email = value,
            ContactField::Phone => self.contact.phone = value,
            ContactField::MessageBody => self.contact.message = value,
        }
    }

    pub(super) fn handle_submit_contact(&mut self, effects: &mut Vec<Effect>) {
        if self.contact.is_submitting() {
            debug!("Submission already in flight, ignoring");
            return;
        }
        if !self.contact.fields_complete() {
            debug!("Contact form incomplete, not submitting");
            return;
        }
        let payload = self.contact.payload();
        if self.contact.begin_submit() {
            info!(from = %payload.email, "Submitting contact message");
            effects.push(Effect::SubmitContact(payload));
        }
    }

    pub(super) fn handle_contact_dispatched(&mut self, error: Option<String>) {
        match &error {
            None => info!("Contact message accepted by the relay"),
            Some(err) => warn!("Contact message failed: {err}"),
        }
        // The relay response lands outside the tick stream; stamp the
        // status with a fresh clock so its display window starts now.
        self.now = std::time::Instant::now();
        let now = self.now;
        self.contact.resolve(error, now);
    }
}
