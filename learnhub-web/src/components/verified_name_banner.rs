use i18nrs::yew::use_translation;
use shared::settings::VerifiedNameMessage;
use yew::{Html, Properties, function_component, html};

use super::alert::{Alert, AlertVariant, OneTimeDismissibleAlert};

#[derive(Properties, PartialEq)]
pub struct VerifiedNameBannerProps {
    pub message: VerifiedNameMessage,
}

/// Outcome of the learner's latest verified-name request.
#[function_component(VerifiedNameBanner)]
pub fn verified_name_banner(props: &VerifiedNameBannerProps) -> Html {
    let (i18n, _) = use_translation();

    match &props.message {
        VerifiedNameMessage::Success { dismissal_id } => html! {
            <OneTimeDismissibleAlert
                id={dismissal_id.clone()}
                variant={AlertVariant::Success}
                header={i18n.t("settings.verified_name.success_header")}
                body={i18n.t("settings.verified_name.success_body")}
            />
        },
        VerifiedNameMessage::Failure { dismissal_id } => html! {
            <OneTimeDismissibleAlert
                id={dismissal_id.clone()}
                variant={AlertVariant::Danger}
                header={i18n.t("settings.verified_name.failure_header")}
                body={i18n.t("settings.verified_name.failure_body")}
            />
        },
        VerifiedNameMessage::Submitted {
            will_cert_name_change,
        } => html! {
            <Alert variant={AlertVariant::Warning} header={i18n.t("settings.verified_name.submitted_header")}>
                <p>{ i18n.t("settings.verified_name.submitted_body") }</p>
                if *will_cert_name_change {
                    <p class="mt-1">{ i18n.t("settings.verified_name.submitted_certificate") }</p>
                }
            </Alert>
        },
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use i18nrs::yew::{I18nProvider, I18nProviderConfig};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_submitted_banner_mentions_certificate_change() {
        #[function_component(Harness)]
        fn harness() -> Html {
            let config = I18nProviderConfig {
                translations: crate::translations(),
                default_language: "en".to_string(),
                ..Default::default()
            };
            html! {
                <I18nProvider ..config>
                    <VerifiedNameBanner message={VerifiedNameMessage::Submitted { will_cert_name_change: true }} />
                </I18nProvider>
            }
        }

        let rendered = yew::ServerRenderer::<Harness>::new().render().await;
        assert!(rendered.contains("alert-warning"));
        assert!(rendered.contains("certificate"));
    }
}
