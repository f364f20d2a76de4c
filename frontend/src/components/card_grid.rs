use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    #[prop_or(3)]
    pub columns: usize,
    pub children: Children,
}

/// Responsive grid that lays out file cards in at most `columns` columns.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax(max(16rem, calc(100% / {} - 1rem)), 1fr));
             gap: 1rem;",
            props.columns.max(1)
        );

        html! {
            <div class="card-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
