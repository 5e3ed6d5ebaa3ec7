use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub icon: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let clickable = props.onclick.is_some();
    html! {
        <div class={classes!("card", "stat-card", clickable.then_some("clickable"))}
            onclick={props.onclick.clone()}>
            <div class="stat-icon">{props.icon.clone()}</div>
            <div>
                <p class="stat-label">{props.label.clone()}</p>
                <p class="stat-value">{props.value.clone()}</p>
            </div>
        </div>
    }
}
