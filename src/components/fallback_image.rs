use log::debug;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: String,
    pub fallback: String,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
}

/// Source to switch to after `current` failed to load, if any.
pub fn next_source(current: &str, src: &str, fallback: &str) -> Option<String> {
    if current == src && src != fallback {
        Some(fallback.to_string())
    } else {
        None
    }
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let current = use_state(|| props.src.clone());

    let onerror = {
        let current = current.clone();
        let src = props.src.clone();
        let fallback = props.fallback.clone();
        Callback::from(move |_: Event| {
            if let Some(next) = next_source(&current, &src, &fallback) {
                debug!("Image {} failed, using {}", src, next);
                current.set(next);
            }
        })
    };

    html! {
        <img src={(*current).clone()} alt={props.alt.clone()} class={props.class.clone()} {onerror} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_to_fallback_once() {
        let next = next_source("/hero-box.jpg", "/hero-box.jpg", "/taxi.png");
        assert_eq!(next.as_deref(), Some("/taxi.png"));
        assert_eq!(next_source("/taxi.png", "/hero-box.jpg", "/taxi.png"), None);
    }

    #[test]
    fn same_fallback_does_not_loop() {
        assert_eq!(next_source("/logo.png", "/logo.png", "/logo.png"), None);
    }
}
