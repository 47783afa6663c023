use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub confirm_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let confirm = props
        .confirm_label
        .clone()
        .unwrap_or_else(|| AttrValue::from("OK"));
    // Clicks inside the dialog must not bubble to the closing backdrop.
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                onclick={swallow_click}
                onkeydown={on_keydown}
            >
                <div class="modal__header">
                    <h2>{ props.title.clone() }</h2>
                </div>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
                <button class="modal-btn" onclick={on_close}>{ confirm }</button>
            </div>
        </div>
    }
}
