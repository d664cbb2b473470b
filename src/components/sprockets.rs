use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum StripEdge {
    Top,
    Bottom,
}

#[derive(Properties, PartialEq)]
pub struct SprocketStripProps {
    pub edge: StripEdge,
    pub holes: usize,
}

#[function_component(SprocketStrip)]
pub fn sprocket_strip(props: &SprocketStripProps) -> Html {
    let edge = match props.edge {
        StripEdge::Top => "sprocket-top",
        StripEdge::Bottom => "sprocket-bottom",
    };

    html! {
        <div class={classes!("sprocket-strip", edge)}>
            { for (0..props.holes).map(|_| html! { <div class="sprocket-hole" /> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choreography::sprockets::hole_count;
    use crate::content::PANEL_COUNT;
    use yew::ServerRenderer;

    async fn rendered_holes(edge: StripEdge, holes: usize) -> usize {
        let html = ServerRenderer::<SprocketStrip>::with_props(move || SprocketStripProps { edge, holes })
            .hydratable(false)
            .render()
            .await;
        html.matches("class=\"sprocket-hole\"").count()
    }

    #[tokio::test]
    async fn strip_renders_one_hole_per_count() {
        assert_eq!(rendered_holes(StripEdge::Top, 144).await, 144);
        assert_eq!(rendered_holes(StripEdge::Bottom, 0).await, 0);
    }

    #[tokio::test]
    async fn resize_replaces_the_old_holes() {
        let wide = hole_count(1920.0, PANEL_COUNT);
        let narrow = hole_count(800.0, PANEL_COUNT);

        assert_eq!(rendered_holes(StripEdge::Top, wide).await, 192);
        // narrowing the window leaves exactly the new count, nothing appended
        assert_eq!(rendered_holes(StripEdge::Top, narrow).await, 80);
        assert_eq!(rendered_holes(StripEdge::Top, wide).await, 192);
    }
}
