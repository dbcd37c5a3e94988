//! Slide stage: every slide stacked, only the active one visible.

use iced::widget::{Container, Stack, container, image, text, tooltip};
use iced::{ContentFit, Element, Length};

use super::super::state::{Carousel, Message};
use super::constants::CAPTION_TEXT;
use crate::core::frame::{Frame, SlideView};

pub(crate) fn build_stage<'a>(state: &'a Carousel, frame: &Frame<'_>) -> Container<'a, Message> {
    let layers: Vec<Element<'a, Message>> = frame
        .slides
        .iter()
        .filter_map(|slide| {
            let handle = state.handles.get(slide.position)?;
            Some(slide_layer(handle, slide))
        })
        .collect();

    container(Stack::with_children(layers).width(Length::Fill).height(Length::Fill))
        .center_x(Length::Fill)
}

fn slide_layer<'a>(handle: &image::Handle, slide: &SlideView<'_>) -> Element<'a, Message> {
    let img = image(handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill)
        .opacity(if slide.active { 1.0 } else { 0.0 });

    if !slide.active {
        return img.into();
    }

    // Alt text surfaces as a hover tooltip on the visible slide.
    let alt = container(text(slide.alt.clone()).size(12))
        .padding(6)
        .style(container::rounded_box);

    tooltip(img, alt, tooltip::Position::Bottom).into()
}

/// Caption of the active slide; empty space when it has none.
pub(crate) fn build_caption<'a>(frame: &Frame<'_>) -> Container<'a, Message> {
    let caption = frame
        .active()
        .and_then(|s| s.caption)
        .unwrap_or_default()
        .to_string();

    container(text(caption).size(CAPTION_TEXT)).center_x(Length::Fill)
}
