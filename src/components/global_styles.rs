use stylist::yew::Global;
use stylist::StyleSource;
use yew::html::IntoPropValue;
use yew::prelude::*;

const GLOBAL_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }

    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        background: #fff;
    }

    ::selection {
        background: #FDEA08;
        color: #000;
    }

    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    .reveal-hidden {
        opacity: 0;
        transform: translateY(30px);
        transition: all 0.8s cubic-bezier(0.5, 0, 0, 1);
    }

    .reveal-visible {
        opacity: 1;
        transform: translateY(0);
    }

    .delay-100 { transition-delay: 100ms; }
    .delay-200 { transition-delay: 200ms; }
    .delay-300 { transition-delay: 300ms; }

    .font-heavy {
        font-family: 'Montserrat', sans-serif;
        font-weight: 900;
    }

    .container {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 1.5rem;
        position: relative;
        z-index: 10;
    }

    .accent {
        color: #FDEA08;
    }
"#;

/// Page-wide rules for reveal transitions, stagger delays and fonts.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    let css: StyleSource = GLOBAL_CSS.to_string().into_prop_value();
    html! { <Global {css} /> }
}
