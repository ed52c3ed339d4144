use yew::prelude::*;

use crate::paths::character_image_path;

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct CharacterIconProps {
    pub character: AttrValue,
}

/// Circular portrait tagged with its character id for layout animation.
#[function_component(CharacterIcon)]
pub fn character_icon(props: &CharacterIconProps) -> Html {
    let src = character_image_path(&props.character);
    html! {
        <div
            class="rounded-full border-2 border-gray-500 bg-gray-500 h-20 w-20 flex overflow-hidden m-1"
            data-layout-id={props.character.clone()}
        >
            <div class="relative h-20 w-20">
                <img src={src} alt={props.character.clone()} />
            </div>
        </div>
    }
}
