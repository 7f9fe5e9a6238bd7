use dioxus::prelude::*;

use crate::icons::FaCamera;
use crate::Icon;

/// A round logo image, or a camera placeholder when there is no URL.
#[component]
pub fn LogoImage(
    url: Option<String>,
    #[props(default = 40)] size: u32,
) -> Element {
    match url {
        Some(src) => rsx! {
            img {
                class: "logo-image",
                src: "{src}",
                alt: "Logo",
                width: "{size}",
                height: "{size}",
            }
        },
        None => rsx! {
            span {
                class: "logo-placeholder",
                title: "No logo",
                Icon { icon: FaCamera, width: size / 2, height: size / 2 }
            }
        },
    }
}
