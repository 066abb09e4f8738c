// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo: spinner area on the left, controls on the right.

use super::Message;
use crate::spinner::SpinnerEngine;
use crate::ui::controls;
use iced::widget::{image, Container, Row, Space};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub engine: &'a SpinnerEngine,
    /// Last rasterized frame; kept while stopped.
    pub frame: Option<&'a image::Handle>,
    pub error: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let spinner_area: Element<'_, Message> = match ctx.frame {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let panel = controls::view(controls::ViewContext {
        engine: ctx.engine,
        error: ctx.error,
    })
    .map(Message::Spinner);

    Container::new(Row::new().push(spinner_area).push(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
