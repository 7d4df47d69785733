//! Basic example showing three segmented controls.
//!
//! Run with: cargo run --example basic
//!
//! Controls:
//! - q / Esc: Quit
//! - Tab: Focus next control
//! - Left/Right/Home/End: Change the focused control's selection
//! - Mouse: Click a segment to select it, scroll to move an overflowing strip

use std::cell::RefCell;
use std::error::Error;
use std::io::{self, stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Borders, Paragraph},
    Terminal,
};
use segmenta::{
    ControlConfig, EdgeInsets, IndicatorPlacement, IndicatorStyle, SegmentContent, SegmentImage,
    SegmentedControl, SegmentedControlWidget, WidthPolicy,
};

fn main() -> Result<(), Box<dyn Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn build_controls() -> segmenta::Result<Vec<SegmentedControl>> {
    let stripe = SegmentedControl::new(
        SegmentContent::text(["Inbox", "Sent", "Drafts", "Archive"]),
        ControlConfig::new()
            .indicator_placement(IndicatorPlacement::Bottom)
            .borders(Borders::BOTTOM)
            .border_color(Color::DarkGray)
            .dividers(true)
            .divider_color(Color::DarkGray),
    )?;

    let mut dynamic = SegmentedControl::new(
        SegmentContent::text([
            "Overview",
            "Metrics",
            "A much longer section title",
            "Logs",
            "Settings",
            "About",
        ]),
        ControlConfig::new()
            .width_policy(WidthPolicy::Dynamic)
            .indicator_style(IndicatorStyle::Box)
            .indicator_color(Color::Rgb(52, 181, 229))
            .background_color(Color::Rgb(20, 20, 30))
            .segment_insets(EdgeInsets::horizontal_only(2.0, 2.0)),
    )?;
    dynamic.set_title_formatter(|config, title, index, selected| {
        let style = if selected {
            config.selected_title_style.fg(Color::Cyan)
        } else {
            config.title_style.add_modifier(Modifier::DIM)
        };
        Line::styled(format!("{}. {title}", index + 1), style)
    });

    let arrow = SegmentedControl::new(
        SegmentContent::text_images(
            ["Home", "Search", "Profile"],
            vec![
                SegmentImage::new(["⌂"]),
                SegmentImage::new(["⌕"]),
                SegmentImage::new(["☺"]),
            ],
            vec![SegmentImage::new(["⌂"]).style(Style::default().fg(Color::Yellow))],
        ),
        ControlConfig::new()
            .indicator_style(IndicatorStyle::Arrow)
            .indicator_placement(IndicatorPlacement::Bottom)
            .indicator_color(Color::Yellow)
            .hit_insets(EdgeInsets::uniform(1.0)),
    )?;

    Ok(vec![stripe, dynamic, arrow])
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), Box<dyn Error>> {
    let mut controls = build_controls()?;
    let status = Rc::new(RefCell::new(String::from("Click a segment")));

    for (n, control) in controls.iter_mut().enumerate() {
        let status = Rc::clone(&status);
        control.on_change(move |index| {
            *status.borrow_mut() = format!("Control {} selected segment {index}", n + 1);
        });
    }

    let mut focused = 0;
    let mut areas = [Rect::default(); 3];

    loop {
        // Draw UI
        terminal.draw(|frame| {
            let rows = Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(frame.area());

            areas = [rows[0], rows[2], rows[4]];
            for (control, area) in controls.iter_mut().zip(areas) {
                control.set_area(area);
                frame.render_widget(SegmentedControlWidget::new(control), area);
            }

            let hint = format!(
                "{}  |  focused: {}  |  Tab focus • ←→ select • q quit",
                status.borrow(),
                focused + 1
            );
            frame.render_widget(
                Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
                rows[6],
            );
        })?;

        // Handle events with a short timeout for responsive updates
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Tab => focused = (focused + 1) % controls.len(),
                    _ => {
                        controls[focused].handle_key(key);
                    }
                },
                Event::Mouse(mouse) => {
                    for (n, (control, area)) in controls.iter_mut().zip(areas).enumerate() {
                        if control.handle_mouse(mouse, area) {
                            focused = n;
                        }
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}
