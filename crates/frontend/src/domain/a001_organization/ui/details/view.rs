use super::view_model::OrganizationDetailsViewModel;
use crate::shared::icons::icon;
use contracts::shared::geo;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn OrganizationDetails() -> impl IntoView {
    let vm = OrganizationDetailsViewModel::new();
    vm.load();

    let form = vm.form;

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Organization profile"}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        disabled=move || vm.is_saving.get() || !vm.is_form_valid()
                        on:click=move |_| vm.save_command()
                    >
                        {icon("check")}
                        {move || if vm.is_saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <button class="warning-box__dismiss" on:click=move |_| vm.error.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}

            <Show when=move || vm.saved.get()>
                <div class="success-box">
                    <span class="success-box__icon">{icon("check")}</span>
                    <span class="success-box__text">{"Profile saved"}</span>
                </div>
            </Show>

            <div class="form">
                <div class="form__row">
                    <label class="form__label">{"Name"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.description = value);
                        }
                    />
                </div>

                <div class="form__row">
                    <label class="form__label">{"Full legal name"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.full_name = value);
                        }
                    />
                </div>

                <div class="form__row">
                    <label class="form__label">{"Trade register (RC)"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.trade_register.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.trade_register = value);
                        }
                    />
                </div>

                <div class="form__row">
                    <label class="form__label">{"Tax id (NIF)"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.tax_id.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.tax_id = value);
                        }
                    />
                </div>

                <div class="form__row">
                    <label class="form__label">{"Phone"}</label>
                    <input
                        type="tel"
                        class="form__input"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.phone = value);
                        }
                    />
                </div>

                <div class="form__row">
                    <label class="form__label">{"Email"}</label>
                    <input
                        type="email"
                        class="form__input"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                </div>

                <div class="form__row">
                    <label class="form__label">{"Address"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.address.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.address = value);
                        }
                    />
                </div>

                <div class="form__row">
                    <label class="form__label">{"Wilaya"}</label>
                    <select
                        class="form__input"
                        prop:value=move || form.with(|f| f.wilaya.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.wilaya = value);
                        }
                    >
                        {geo::wilaya_names().into_iter().map(|name| view! {
                            <option value=name>{name}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form__row">
                    <label class="form__label">{"Comment"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.comment.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.comment = if value.trim().is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                </div>
            </div>
        </div>
    }
}
