use std::any::Any;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use super::state::{NavAction, NavigationState, Section, WindowScroll};
use super::subscription::ScrollTracker;
use crate::components::fallback_image::FallbackImage;
use crate::config;

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        width: 100%;
        z-index: 50;
        padding: 1.5rem 0;
        background: transparent;
        transition: all 0.3s ease;
    }
    .top-nav.scrolled {
        background: #000;
        padding: 1rem 0;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
    }
    .nav-content {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo img {
        height: 4rem;
        width: auto;
        transition: transform 0.3s ease;
    }
    .nav-logo:hover img {
        transform: scale(1.05);
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-link {
        color: #fff;
        font-weight: 700;
        text-transform: uppercase;
        font-size: 0.875rem;
        letter-spacing: 0.05em;
        text-decoration: none;
    }
    .nav-link:hover {
        color: #FDEA08;
    }
    .nav-cta {
        background: #FDEA08;
        color: #000;
        padding: 0.5rem 1.5rem;
        border-radius: 0.25rem;
        font-weight: 900;
        text-transform: uppercase;
        text-decoration: none;
        transition: all 0.3s ease;
    }
    .nav-cta:hover {
        background: #fff;
        transform: translateY(-0.25rem);
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: #fff;
        font-size: 1.75rem;
        z-index: 60;
        cursor: pointer;
    }
    .mobile-overlay {
        position: fixed;
        inset: 0;
        z-index: 40;
        background: rgba(0, 0, 0, 0.95);
        display: none;
        align-items: center;
        justify-content: center;
        transform: translateX(100%);
        transition: transform 0.3s ease-in-out;
    }
    .mobile-overlay.open {
        transform: translateX(0);
    }
    .mobile-overlay-links {
        display: flex;
        flex-direction: column;
        gap: 2rem;
        text-align: center;
        width: 100%;
        max-width: 24rem;
        padding: 2rem;
    }
    .mobile-overlay .nav-link {
        font-size: 1.5rem;
        font-weight: 900;
    }
    .mobile-overlay .nav-cta {
        padding: 1rem 1.5rem;
        font-size: 1.25rem;
        box-shadow: 0 0 20px rgba(253, 234, 8, 0.3);
    }
    @media (max-width: 768px) {
        .top-nav {
            background: rgba(0, 0, 0, 0.9);
            padding: 1rem 0;
        }
        .top-nav.scrolled {
            padding: 0.75rem 0;
        }
        .nav-logo img {
            height: 3rem;
        }
        .nav-links {
            display: none;
        }
        .burger-menu {
            display: block;
        }
        .mobile-overlay {
            display: flex;
        }
    }
"#;

#[function_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer(NavigationState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_once(move || {
            let tracker = ScrollTracker::new(
                WindowScroll,
                Date::now,
                Box::new(|delay: u32, run: Box<dyn FnOnce()>| Box::new(Timeout::new(delay, run)) as Box<dyn Any>),
                Callback::from(move |action| dispatcher.dispatch(action)),
            );

            // Page may be restored mid-scroll
            tracker.sample();

            if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::<dyn Fn()>::new(tracker.scroll_handler());
                let subscribed = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                match subscribed {
                    Ok(()) => tracker.on_release(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }),
                    Err(e) => warn!("Failed to subscribe to scroll events: {:?}", e),
                }
            }

            move || tracker.release()
        });
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    let select_link = |section: Section| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Navigating to #{}", section.anchor());
            state.dispatch(NavAction::LinkSelected(section));
        })
    };

    let call_to_action = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Try Demo selected");
            state.dispatch(NavAction::CallToAction);
        })
    };

    let demo_href = Section::Contact.href();

    html! {
        <nav class={classes!("top-nav", state.is_scrolled.then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <FallbackImage
                        src={config::asset_url("/logo.png")}
                        fallback={config::asset_url("/logo.png")}
                        alt="Taxi Tax Software Logo"
                    />
                </a>

                <div class="nav-links">
                    { for Section::NAV_ORDER.iter().map(|section| html! {
                        <a href={section.href()} class="nav-link" onclick={select_link(*section)}>
                            {section.label()}
                        </a>
                    }) }
                    <a href={demo_href.clone()} class="nav-cta" onclick={call_to_action.clone()}>
                        {"Try Demo"}
                    </a>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if state.is_menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-overlay", state.is_menu_open.then(|| "open"))}>
                <div class="mobile-overlay-links">
                    { for Section::NAV_ORDER.iter().map(|section| html! {
                        <a href={section.href()} class="nav-link" onclick={select_link(*section)}>
                            {section.label()}
                        </a>
                    }) }
                    <a href={demo_href} class="nav-cta" onclick={call_to_action}>
                        {"Try Demo"}
                    </a>
                </div>
            </div>
        </nav>
    }
}
