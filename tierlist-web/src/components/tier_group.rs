use tierlist_core::{Tier, tier_color_or_fallback};
use yew::prelude::*;

use crate::components::CharacterIcon;
use crate::layout::use_layout_animation;

#[derive(Properties, PartialEq, Clone)]
pub struct TierGroupProps {
    pub tier: Tier,
    /// Version being shown; a change re-runs layout animation even when this
    /// tier's members are unchanged, since tiers above it may have resized.
    #[prop_or_default]
    pub revision: AttrValue,
}

/// Colored tier header followed by its wrapping row of character icons.
#[function_component(TierGroup)]
pub fn tier_group(props: &TierGroupProps) -> Html {
    let group_ref = use_node_ref();
    use_layout_animation(group_ref.clone());

    let name = props.tier.name.clone();
    let header_class = classes!(
        "w-max",
        "px-2",
        "py-1",
        "text-white",
        "rounded-t",
        "-mb-1",
        tier_color_or_fallback(&name)
    );

    html! {
        <div class="px-5">
            <h2 class={header_class}>{ format!("{name} Tier") }</h2>
            <div
                ref={group_ref}
                class="rounded-b rounded-tr px-2 py-4 bg-gray-600 flex flex-wrap"
                data-layout-group={name.clone()}
            >
                { for props.tier.characters.iter().map(|character| html! {
                    <CharacterIcon key={character.clone()} character={AttrValue::from(character.clone())} />
                }) }
            </div>
        </div>
    }
}
