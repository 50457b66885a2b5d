use crate::channel::{ChannelReading, CHANNEL_COUNT};
use crate::config::Config;
use crate::refresh::{Refresher, Snapshot};
use crate::thresholds::classify;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Element, Length, Subscription, Task};

pub const WINDOW_TITLE: &str = "TPT-48Ch-CVC";
pub const WINDOW_SIZE: (f32, f32) = (1000.0, 700.0);

/// Channel grid layout: 8 rows of 6 cells
pub const GRID_COLUMNS: usize = 6;
pub const GRID_ROWS: usize = 8;

const _: () = assert!(GRID_COLUMNS * GRID_ROWS == CHANNEL_COUNT as usize);

// Balancing parameters shown on the status panel
const STATIC_STATUS: [(&str, &str); 5] = [
    ("Load power:", "0 W"),
    ("Balance start voltage:", "3.400 V"),
    ("Forced balance voltage:", "3.600 V"),
    ("Balance cell difference:", "0.002 V"),
    ("Balance temperature:", "25 °C"),
];

// Iced Application State
pub struct MonitorApp {
    refresher: Refresher<fastrand::Rng>,
    snapshot: Snapshot,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
}

impl MonitorApp {
    /// Generates the first reading set right away; the timer takes over after one period
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let mut refresher = Refresher::from_config(&config);
        let snapshot = refresher.refresh();
        (MonitorApp { refresher, snapshot }, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => {
                self.snapshot = self.refresher.refresh();
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::time::every(self.refresher.period()).map(|_| Message::Refresh)
    }

    pub fn view(&'_ self) -> Element<'_, Message> {
        let top = row![self.create_channel_grid(), self.create_status_panel()]
            .spacing(10)
            .height(Length::Fill);

        let content = column![top, self.create_summary_panel()]
            .spacing(10)
            .padding(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn create_channel_grid(&self) -> Element<'_, Message> {
        let mut grid = Column::new()
            .spacing(4)
            .width(Length::FillPortion(3))
            .height(Length::Fill);

        for cells in self.snapshot.readings.as_slice().chunks(GRID_COLUMNS) {
            let grid_row = Row::with_children(cells.iter().map(channel_cell))
                .spacing(4)
                .height(Length::Fill);
            grid = grid.push(grid_row);
        }

        grid.into()
    }

    fn create_status_panel(&self) -> Element<'_, Message> {
        let company = text("ThinkPower").size(28).color(styles::BRAND_BLUE);
        let connection = text("Connected").size(14).color(styles::CONNECTED_GREEN);

        let info = status_entries(&self.snapshot)
            .into_iter()
            .fold(Column::new().spacing(6), |column, (label, value)| {
                column.push(info_row(label, value))
            });

        let status_box = container(column![text("Status").size(16), info].spacing(8))
            .padding(10)
            .style(container::bordered_box)
            .width(Length::Fill);

        let auto_button = button(text("Auto balance").size(16))
            .padding(14)
            .style(styles::balance_button_style(styles::AUTO_BALANCE_GREEN));
        let force_button = button(text("Force balance").size(16))
            .padding(14)
            .style(styles::balance_button_style(styles::FORCE_BALANCE_RED));

        column![
            company,
            connection,
            status_box,
            row![auto_button, force_button].spacing(10)
        ]
        .spacing(20)
        .padding(10)
        .width(Length::Fixed(300.0))
        .align_x(Horizontal::Center)
        .into()
    }

    fn create_summary_panel(&self) -> Element<'_, Message> {
        let entries = summary_entries(&self.snapshot);

        let mut grid = Column::new().spacing(3);
        for line in entries.chunks(3) {
            let cells = line.iter().map(|(label, value)| -> Element<'_, Message> {
                text(format!("{} {}", label, value))
                    .size(12)
                    .width(Length::FillPortion(1))
                    .into()
            });
            grid = grid.push(Row::with_children(cells).spacing(15));
        }

        container(column![text("Summary").size(14), grid].spacing(6))
            .padding(10)
            .style(container::bordered_box)
            .width(Length::Fill)
            .height(Length::Fixed(100.0))
            .into()
    }
}

/// Channel number beside a voltage box colored by its category
fn channel_cell<'a>(reading: &ChannelReading) -> Element<'a, Message> {
    let category = classify(reading.id, reading.voltage);

    let number = text(reading.id.label()).size(12).width(Length::Fixed(20.0));
    let value = container(text(format!("{:.3} V", reading.voltage)).size(14))
        .style(styles::cell_style(category))
        .center(Length::Fill);

    row![number, value]
        .spacing(3)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn info_row<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![text(label).size(13).width(Length::Fill), text(value).size(13)]
        .spacing(5)
        .into()
}

/// Rows of the status panel, totals first
pub fn status_entries(snapshot: &Snapshot) -> Vec<(&'static str, String)> {
    let aggregate = &snapshot.aggregate;
    let mut entries = vec![
        ("Total voltage:", format!("{:.1} V", aggregate.total_voltage)),
        ("Charge current:", format!("{:.3} A", aggregate.total_current)),
    ];
    entries.extend(
        STATIC_STATUS
            .iter()
            .map(|(label, value)| (*label, value.to_string())),
    );
    entries.push(("Refresh cycle:", snapshot.cycle.to_string()));
    entries.push((
        "Last update:",
        snapshot.taken_at.format("%H:%M:%S").to_string(),
    ));
    entries
}

/// Bottom panel entries, laid out three per line
pub fn summary_entries(snapshot: &Snapshot) -> Vec<(&'static str, String)> {
    let missing = || "-".to_string();
    let summary = snapshot.summary.as_ref();

    vec![
        (
            "Highest voltage:",
            summary.map_or_else(missing, |s| format!("{:.3} V", s.highest.voltage)),
        ),
        (
            "Highest cell:",
            summary.map_or_else(missing, |s| s.highest.id.number().to_string()),
        ),
        ("Switch 1:", "balance on".to_string()),
        (
            "Lowest voltage:",
            summary.map_or_else(missing, |s| format!("{:.3} V", s.lowest.voltage)),
        ),
        (
            "Lowest cell:",
            summary.map_or_else(missing, |s| s.lowest.id.number().to_string()),
        ),
        ("Switch 2:", "balance off".to_string()),
        (
            "Cell spread:",
            summary.map_or_else(missing, |s| format!("{:.3} V", s.spread)),
        ),
        (
            "Valid cells:",
            summary.map_or_else(missing, |s| s.valid_cells.to_string()),
        ),
        ("Balancing:", "off".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::tests::FixedSource;
    use crate::refresh::REFRESH_PERIOD;

    fn seeded_config() -> Config {
        Config {
            refresh_interval_secs: 15,
            seed: Some(5),
        }
    }

    #[test]
    fn test_new_generates_initial_snapshot() {
        let (app, _task) = MonitorApp::new(seeded_config());
        assert_eq!(app.snapshot.cycle, 1);
        assert_eq!(app.snapshot.readings.len(), 48);
    }

    #[test]
    fn test_refresh_message_replaces_snapshot() {
        let (mut app, _task) = MonitorApp::new(seeded_config());
        let before = app.snapshot.readings.clone();

        let _ = app.update(Message::Refresh);

        assert_eq!(app.snapshot.cycle, 2);
        assert_ne!(app.snapshot.readings, before);
    }

    #[test]
    fn test_status_entries_format_totals() {
        let source = FixedSource { voltage: 3.5, current: 0.5 };
        let snapshot = Refresher::new(source, REFRESH_PERIOD).refresh();
        let entries = status_entries(&snapshot);

        assert_eq!(entries[0], ("Total voltage:", "168.0 V".to_string()));
        assert_eq!(entries[1], ("Charge current:", "24.000 A".to_string()));
        assert_eq!(entries.len(), 2 + STATIC_STATUS.len() + 2);
    }

    #[test]
    fn test_summary_entries() {
        let source = FixedSource { voltage: 3.6, current: 0.1 };
        let snapshot = Refresher::new(source, REFRESH_PERIOD).refresh();
        let entries = summary_entries(&snapshot);

        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0].1, "3.600 V");
        assert_eq!(entries[1].1, "1");
        assert_eq!(entries[6].1, "0.000 V");
        assert_eq!(entries[7].1, "48");
    }
}
