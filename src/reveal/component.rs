use log::warn;
use web_sys::Element;
use yew::prelude::*;

use super::controller::{reveal_classes, RevealController, RevealDelay};
use super::observer::{DomViewportObserver, ObserverOptions};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay: RevealDelay,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let set_visible = visible.setter();
        use_effect_with_deps(
            move |_| {
                let on_reveal = Callback::from(move |_| set_visible.set(true));
                let controller = match node.cast::<Element>() {
                    Some(element) => match DomViewportObserver::detect() {
                        Some(observer) => RevealController::mount(
                            &observer,
                            &element,
                            ObserverOptions::default(),
                            on_reveal,
                        ),
                        None => {
                            warn!("IntersectionObserver unsupported, showing block immediately");
                            RevealController::revealed(on_reveal)
                        }
                    },
                    None => RevealController::revealed(on_reveal),
                };
                move || controller.unmount()
            },
            (),
        );
    }

    html! {
        <div ref={node} class={reveal_classes(&props.class, *visible, props.delay)}>
            { for props.children.iter() }
        </div>
    }
}
