use super::model;
use contracts::domain::a001_organization::aggregate::OrganizationDto;
use leptos::prelude::*;

/// ViewModel for the organization profile form
#[derive(Clone, Copy)]
pub struct OrganizationDetailsViewModel {
    pub form: RwSignal<OrganizationDto>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    pub saved: RwSignal<bool>,
}

impl OrganizationDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(OrganizationDto::default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            saved: RwSignal::new(false),
        }
    }

    pub fn load(&self) {
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_profile().await {
                Ok(dto) => form.set(dto),
                Err(e) => error.set(Some(format!("Could not load the profile: {}", e))),
            }
        });
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Validate and persist. A failed save keeps the form intact so the
    /// user can fix the input and retry.
    pub fn save_command(&self) {
        let current = self.form.get();

        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        let is_saving = self.is_saving;
        let saved = self.saved;
        is_saving.set(true);
        saved.set(false);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_profile(&current).await {
                Ok(()) => {
                    error.set(None);
                    saved.set(true);
                }
                Err(e) => error.set(Some(e)),
            }
            is_saving.set(false);
        });
    }
}

impl Default for OrganizationDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
