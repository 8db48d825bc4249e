//! Local-login dialog collecting transient credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visibility is owned by the session state (`login_prompt_open`), not by
//! this component: the access gate opens and closes the dialog, and the
//! credential fields live only as long as one prompt interaction.

#[cfg(test)]
#[path = "login_dialog_test.rs"]
mod login_dialog_test;

use leptos::prelude::*;

use crate::state::session::{SessionEvent, SessionState};

/// Trim and require both credential fields.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both user ID and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Modal dialog for username/password sign-in.
///
/// Submits the credentials as a POST body; on success the browser performs
/// a full-page navigation to the post-login target, so no in-memory state
/// needs updating here. A rejected login is shown inline and the fields
/// stay editable.
#[component]
pub fn LoginDialog() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_cancel = Callback::new(move |()| {
        session.update(|s| s.apply(SessionEvent::PromptClosed));
    });

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok((user, pass)) => {
                busy.set(true);
                error.set(String::new());
                #[cfg(feature = "csr")]
                {
                    leptos::task::spawn_local(async move {
                        match crate::net::api::submit_local_login(&user, &pass).await {
                            Ok(()) => crate::net::api::redirect_to_app(),
                            Err(e) => {
                                error.set(e);
                                busy.set(false);
                            }
                        }
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (user, pass);
                }
            }
            Err(msg) => error.set(msg.to_owned()),
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog login-dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Sign in"</h2>
                <label class="dialog__label">
                    "User ID"
                    <input
                        class="dialog__input"
                        type="text"
                        name="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        name="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Sign in"
                    </button>
                </div>
            </div>
        </div>
    }
}
