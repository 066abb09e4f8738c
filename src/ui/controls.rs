// SPDX-License-Identifier: MPL-2.0
//! Parameter panel.
//!
//! Every control reads its value back from the engine, so a rejected value
//! snaps the control back to the last accepted one.

use crate::spinner::{Message, SpinnerEngine};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, container, slider, toggler, Column, Row, Space, Text};
use iced::{Element, Length};

/// Context required to render the panel.
pub struct ViewContext<'a> {
    pub engine: &'a SpinnerEngine,
    /// Text of the last rejected setting, if any.
    pub error: Option<&'a str>,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let engine = ctx.engine;
    let params = engine.parameters();

    let mut panel = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .push(section_title("Shape"))
        .push(labeled(
            format!("Arrows: {}", params.arrow_count()),
            slider(1..=20, params.arrow_count(), Message::SetArrowCount).into(),
        ))
        .push(ratio_slider("Gap", params.gap_ratio(), Message::SetGapRatio))
        .push(ratio_slider(
            "Thickness",
            params.thickness_ratio(),
            Message::SetThicknessRatio,
        ))
        .push(ratio_slider(
            "Arrow width",
            params.arrow_width_ratio(),
            Message::SetArrowWidthRatio,
        ))
        .push(ratio_slider(
            "Arrow length",
            params.arrow_length_ratio(),
            Message::SetArrowLengthRatio,
        ))
        .push(ratio_slider(
            "Barb indent",
            params.barb_indent_ratio(),
            Message::SetBarbIndentRatio,
        ))
        .push(
            toggler(engine.is_clockwise())
                .label("Clockwise")
                .on_toggle(Message::SetClockwise)
                .size(sizing::TOGGLER_SIZE),
        )
        .push(section_title("Animation"))
        .push(labeled(
            format!("Revolutions/s: {:.2}", engine.revolutions_per_second()),
            slider(
                0.1..=10.0,
                engine.revolutions_per_second(),
                Message::SetRevolutionsPerSecond,
            )
            .step(0.05)
            .into(),
        ))
        .push(labeled(
            format!("Frame rate: {} fps", frame_rate(engine)),
            slider(1..=240, frame_rate(engine), Message::SetFrameRate).into(),
        ))
        .push(
            toggler(engine.is_enabled())
                .label("Enabled")
                .on_toggle(Message::SetEnabled)
                .size(sizing::TOGGLER_SIZE),
        )
        .push(run_buttons(engine));

    if let Some(error) = ctx.error {
        panel = panel.push(
            Text::new(error)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    container(panel).height(Length::Fill).into()
}

fn section_title<'a>(title: &'a str) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::TITLE_SM)
        .color(palette::GRAY_700)
        .into()
}

fn labeled(label: String, control: Element<'_, Message>) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(control)
        .into()
}

fn ratio_slider<'a>(
    label: &str,
    value: f64,
    on_change: fn(f64) -> Message,
) -> Element<'a, Message> {
    labeled(
        format!("{label}: {value:.3}"),
        slider(0.0..=1.0, value, on_change).step(0.005).into(),
    )
}

fn run_buttons(engine: &SpinnerEngine) -> Element<'_, Message> {
    let running = engine.is_running();
    let start = button(Text::new("Start")).padding([6, 12]);
    let stop = button(Text::new("Stop")).padding([6, 12]);

    Row::new()
        .spacing(spacing::XS)
        .push(if running { start } else { start.on_press(Message::Start) })
        .push(if running { stop.on_press(Message::Stop) } else { stop })
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(format!("{:.1}°", engine.angle_degrees()))
                .size(typography::CAPTION)
                .color(palette::GRAY_900),
        )
        .into()
}

/// Frame rate recovered from the engine's frame interval.
fn frame_rate(engine: &SpinnerEngine) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fps = (1000.0 / engine.frame_interval_ms()).round() as u32;
    fps
}
