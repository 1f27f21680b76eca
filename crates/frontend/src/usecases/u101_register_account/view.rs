use super::model;
use super::state::{
    set_dayra, set_wilaya, validate_step, AccountType, RegistrationForm, WizardStep,
};
use crate::shared::icons::icon;
use contracts::shared::geo;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn RegisterAccountWizard() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let step = RwSignal::new(WizardStep::Account);
    let field_errors = RwSignal::new(Vec::<(&'static str, String)>::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (completed, set_completed) = signal::<Option<String>>(None);

    let error_for = move |field: &'static str| {
        field_errors.with(|errs| {
            errs.iter()
                .find(|(f, _)| *f == field)
                .map(|(_, msg)| msg.clone())
        })
    };

    let handle_next = move |_| {
        let errors = form.with(|f| validate_step(f, step.get()));
        if errors.is_empty() {
            field_errors.set(Vec::new());
            if let Some(next) = step.get().next() {
                step.set(next);
            }
        } else {
            field_errors.set(errors);
        }
    };

    let handle_back = move |_| {
        field_errors.set(Vec::new());
        if let Some(prev) = step.get().prev() {
            step.set(prev);
        }
    };

    let handle_submit = move |_| {
        let current = form.get();
        set_is_submitting.set(true);
        set_submit_error.set(None);
        spawn_local(async move {
            match model::submit_registration(&current).await {
                Ok(name) => {
                    set_completed.set(Some(name));
                    set_submit_error.set(None);
                }
                // The form stays as-is so the user can adjust and retry.
                Err(e) => set_submit_error.set(Some(e)),
            }
            set_is_submitting.set(false);
        });
    };

    let field_error_view = move |field: &'static str| {
        view! {
            {move || error_for(field).map(|msg| view! {
                <span class="form__error">{msg}</span>
            })}
        }
    };

    let account_step = move || {
        view! {
            <div class="wizard__step">
                <div class="form__row">
                    <label class="form__label">{"Email"}</label>
                    <input
                        type="email"
                        class="form__input"
                        class:form__input--invalid=move || error_for("email").is_some()
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                    {field_error_view("email")}
                </div>

                <div class="form__row">
                    <label class="form__label">{"Password"}</label>
                    <input
                        type="password"
                        class="form__input"
                        class:form__input--invalid=move || error_for("password").is_some()
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.password = value);
                        }
                    />
                    {field_error_view("password")}
                </div>

                <div class="form__row">
                    <label class="form__label">{"Confirm password"}</label>
                    <input
                        type="password"
                        class="form__input"
                        class:form__input--invalid=move || error_for("password_confirm").is_some()
                        prop:value=move || form.with(|f| f.password_confirm.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.password_confirm = value);
                        }
                    />
                    {field_error_view("password_confirm")}
                </div>

                <div class="form__row">
                    <label class="form__label">{"Account type"}</label>
                    <div class="form__radio-group">
                        {[AccountType::Buyer, AccountType::Seller].into_iter().map(|t| view! {
                            <label class="form__radio">
                                <input
                                    type="radio"
                                    name="account_type"
                                    value=t.as_str()
                                    prop:checked=move || form.with(|f| f.account_type == t)
                                    on:change=move |_| form.update(|f| f.account_type = t)
                                />
                                {t.label()}
                            </label>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        }
    };

    let organization_step = move || {
        view! {
            <div class="wizard__step">
                <div class="form__row">
                    <label class="form__label">{"Organization name"}</label>
                    <input
                        type="text"
                        class="form__input"
                        class:form__input--invalid=move || error_for("organization_name").is_some()
                        prop:value=move || form.with(|f| f.organization_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.organization_name = value);
                        }
                    />
                    {field_error_view("organization_name")}
                </div>

                <Show when=move || form.with(|f| f.account_type == AccountType::Seller)>
                    <div class="form__row">
                        <label class="form__label">{"Trade register (RC)"}</label>
                        <input
                            type="text"
                            class="form__input"
                            class:form__input--invalid=move || error_for("trade_register").is_some()
                            prop:value=move || form.with(|f| f.trade_register.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.trade_register = value);
                            }
                        />
                        {field_error_view("trade_register")}
                    </div>
                </Show>

                <div class="form__row">
                    <label class="form__label">{"Phone"}</label>
                    <input
                        type="tel"
                        class="form__input"
                        class:form__input--invalid=move || error_for("phone").is_some()
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.phone = value);
                        }
                    />
                    {field_error_view("phone")}
                </div>
            </div>
        }
    };

    let location_step = move || {
        view! {
            <div class="wizard__step">
                <div class="form__row">
                    <label class="form__label">{"Wilaya"}</label>
                    <select
                        class="form__input"
                        class:form__input--invalid=move || error_for("wilaya").is_some()
                        prop:value=move || form.with(|f| f.wilaya.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| set_wilaya(f, &value));
                        }
                    >
                        <option value="">{"Select a wilaya..."}</option>
                        {geo::wilaya_names().into_iter().map(|name| view! {
                            <option value=name>{name}</option>
                        }).collect_view()}
                    </select>
                    {field_error_view("wilaya")}
                </div>

                <div class="form__row">
                    <label class="form__label">{"Dayra"}</label>
                    <select
                        class="form__input"
                        class:form__input--invalid=move || error_for("dayra").is_some()
                        disabled=move || form.with(|f| f.wilaya.is_empty())
                        prop:value=move || form.with(|f| f.dayra.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| set_dayra(f, &value));
                        }
                    >
                        <option value="">{"Select a dayra..."}</option>
                        {move || {
                            let wilaya = form.with(|f| f.wilaya.clone());
                            geo::dayras_of(&wilaya).iter().map(|d| view! {
                                <option value=d.name>{d.name}</option>
                            }).collect_view()
                        }}
                    </select>
                    {field_error_view("dayra")}
                </div>

                <div class="form__row">
                    <label class="form__label">{"Baladia"}</label>
                    <select
                        class="form__input"
                        class:form__input--invalid=move || error_for("baladia").is_some()
                        disabled=move || form.with(|f| f.dayra.is_empty())
                        prop:value=move || form.with(|f| f.baladia.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.baladia = value);
                        }
                    >
                        <option value="">{"Select a baladia..."}</option>
                        {move || {
                            let (wilaya, dayra) = form.with(|f| (f.wilaya.clone(), f.dayra.clone()));
                            geo::baladias_of(&wilaya, &dayra).iter().map(|b| view! {
                                <option value=*b>{*b}</option>
                            }).collect_view()
                        }}
                    </select>
                    {field_error_view("baladia")}
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
            </div>
        }
    };

    let review_step = move || {
        let f = form.get();
        view! {
            <div class="wizard__step">
                <dl class="wizard__review">
                    <dt>{"Email"}</dt><dd>{f.email.clone()}</dd>
                    <dt>{"Account type"}</dt><dd>{f.account_type.label()}</dd>
                    <dt>{"Organization"}</dt><dd>{f.organization_name.clone()}</dd>
                    {(f.account_type == AccountType::Seller).then(|| view! {
                        <dt>{"Trade register"}</dt><dd>{f.trade_register.clone()}</dd>
                    })}
                    <dt>{"Phone"}</dt><dd>{f.phone.clone()}</dd>
                    <dt>{"Location"}</dt>
                    <dd>{format!("{}, {}, {}", f.baladia, f.dayra, f.wilaya)}</dd>
                    {(!f.address.trim().is_empty()).then(|| view! {
                        <dt>{"Address"}</dt><dd>{f.address.clone()}</dd>
                    })}
                </dl>
            </div>
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Create account"}</h1>
                </div>
            </div>

            <Show
                when=move || completed.get().is_none()
                fallback=move || view! {
                    <div class="success-box">
                        <span class="success-box__icon">{icon("check")}</span>
                        <span class="success-box__text">
                            {move || format!(
                                "Welcome, {}! Your account has been created.",
                                completed.get().unwrap_or_default()
                            )}
                        </span>
                    </div>
                }
            >
                <div class="wizard">
                    <div class="wizard__steps">
                        {WizardStep::all().iter().map(|s| {
                            let s = *s;
                            view! {
                                <div
                                    class="wizard__step-marker"
                                    class:wizard__step-marker--active=move || step.get() == s
                                    class:wizard__step-marker--done=move || { step.get().index() > s.index() }
                                >
                                    <span class="wizard__step-number">{s.index() + 1}</span>
                                    <span class="wizard__step-title">{s.title()}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>

                    {move || submit_error.get().map(|e| view! {
                        <div class="warning-box">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                            <button class="warning-box__dismiss" on:click=move |_| set_submit_error.set(None)>
                                {icon("x")}
                            </button>
                        </div>
                    })}

                    {move || match step.get() {
                        WizardStep::Account => account_step().into_any(),
                        WizardStep::Organization => organization_step().into_any(),
                        WizardStep::Location => location_step().into_any(),
                        WizardStep::Review => review_step().into_any(),
                    }}

                    <div class="wizard__actions">
                        <Show when=move || step.get().prev().is_some()>
                            <button
                                class="button button--secondary"
                                disabled=move || is_submitting.get()
                                on:click=handle_back
                            >
                                {icon("chevron-left")}
                                {"Back"}
                            </button>
                        </Show>
                        <Show
                            when=move || step.get().next().is_some()
                            fallback=move || view! {
                                <button
                                    class="button button--primary"
                                    disabled=move || is_submitting.get()
                                    on:click=handle_submit
                                >
                                    {move || if is_submitting.get() { "Submitting..." } else { "Create account" }}
                                </button>
                            }
                        >
                            <button class="button button--primary" on:click=handle_next>
                                {"Next"}
                                {icon("chevron-right")}
                            </button>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
