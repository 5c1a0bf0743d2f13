//! Application state and render loop
//!
//! Layout: the map canvas on the left, a side panel on the right with
//! the info text, the legend, and the vintage bar chart. Mouse clicks
//! on the canvas select the containing ZIP area; a click outside every
//! polygon clears the selection.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph,
    },
    Frame,
};
use zipmap_core::{panel, MapState};
use zipmap_io::Bounds;

/// Main application state
pub struct App {
    /// Map model: dataset, classification, selection
    pub state: MapState,
    /// Inner rect of the map canvas from the last render, for mouse
    /// hit testing
    map_inner: Rect,
}

impl App {
    /// Create a new application instance
    pub fn new(state: MapState) -> Self {
        Self {
            state,
            map_inner: Rect::default(),
        }
    }

    /// Render the application
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Key hints
            ])
            .split(size);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),     // Map canvas
                Constraint::Length(44), // Side panel
            ])
            .split(chunks[0]);

        self.map_inner = content[0].inner(Margin::new(1, 1));

        self.render_map(frame, content[0]);
        self.render_side_panel(frame, content[1]);
        self.render_hints(frame, chunks[1]);
    }

    fn render_map(&self, frame: &mut Frame, area: Rect) {
        let state = &self.state;
        let bounds = state.dataset().bounds();
        let selected = state.selected_index();

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .title("ZIP Demand Choropleth")
                    .borders(Borders::ALL),
            )
            .x_bounds([bounds.min_lon, bounds.max_lon])
            .y_bounds([bounds.min_lat, bounds.max_lat])
            .paint(|ctx| {
                for (index, zip_area) in state.dataset().areas().iter().enumerate() {
                    if Some(index) == selected {
                        continue;
                    }
                    let style = state.style_for(zip_area);
                    draw_boundary(ctx, zip_area, tui_color(style.fill_color));
                }
                // The selection is drawn last, in the outline color, so
                // it stays visible on top of its neighbors.
                if let Some(zip_area) = state.selected_area() {
                    let style = state.style_for(zip_area);
                    draw_boundary(ctx, zip_area, tui_color(style.outline_color));
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_side_panel(&self, frame: &mut Frame, area: Rect) {
        let legend = self.state.legend();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),                      // Info panel
                Constraint::Length(legend.len() as u16 + 2), // Legend
                Constraint::Min(0),                         // Vintage chart
            ])
            .split(area);

        self.render_info(frame, chunks[0]);
        self.render_legend(frame, chunks[1], &legend);
        self.render_chart(frame, chunks[2]);
    }

    fn render_info(&self, frame: &mut Frame, area: Rect) {
        let title = match self.state.selected_area() {
            Some(zip_area) => panel::popup_title(&zip_area.demand),
            None => "Info".to_string(),
        };

        let lines: Vec<Line> = self
            .state
            .info_lines()
            .into_iter()
            .map(Line::from)
            .collect();

        let info = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(info, area);
    }

    fn render_legend(
        &self,
        frame: &mut Frame,
        area: Rect,
        legend: &[zipmap_core::LegendEntry],
    ) {
        let lines: Vec<Line> = legend
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        "\u{2588}\u{2588} ",
                        Style::default().fg(tui_color(entry.color)),
                    ),
                    Span::raw(entry.label.clone()),
                ])
            })
            .collect();

        let widget =
            Paragraph::new(lines).block(Block::default().title("Legend").borders(Borders::ALL));
        frame.render_widget(widget, area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let bars: Vec<Bar> = self
            .state
            .chart()
            .bars()
            .into_iter()
            .map(|(label, value)| Bar::default().label(Line::from(label)).value(value))
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .title("Housing Units by Year Built")
                    .borders(Borders::ALL),
            )
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&bars));

        frame.render_widget(chart, area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = Paragraph::new(" click: select  |  j/k: cycle  |  c/Esc: clear  |  q: quit")
            .style(Style::default().bg(Color::DarkGray));
        frame.render_widget(hints, area);
    }

    /// Handle a key press; returns true when the app should quit
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') | KeyCode::Esc => self.state.clear_selection(),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            _ => {}
        }
        false
    }

    /// Handle a mouse event: left clicks on the map select or clear
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let bounds = self.state.dataset().bounds();
        if let Some((lon, lat)) =
            canvas_to_lonlat(mouse.column, mouse.row, self.map_inner, bounds)
        {
            self.state.select_at(lon, lat);
        }
    }
}

/// Map a terminal cell inside the canvas to lon/lat
///
/// Cells map through their centers; rows grow downward while latitude
/// grows upward. Returns `None` outside the canvas.
fn canvas_to_lonlat(column: u16, row: u16, area: Rect, bounds: Bounds) -> Option<(f64, f64)> {
    if area.width == 0 || area.height == 0 || !area.contains(Position::new(column, row)) {
        return None;
    }

    let fx = ((column - area.x) as f64 + 0.5) / area.width as f64;
    let fy = ((row - area.y) as f64 + 0.5) / area.height as f64;

    Some((
        bounds.min_lon + fx * bounds.width(),
        bounds.max_lat - fy * bounds.height(),
    ))
}

fn draw_boundary(
    ctx: &mut ratatui::widgets::canvas::Context,
    zip_area: &zipmap_io::ZipArea,
    color: Color,
) {
    for polygon in &zip_area.boundary {
        let ring = &polygon.exterior().0;
        for window in ring.windows(2) {
            ctx.draw(&CanvasLine {
                x1: window[0].x,
                y1: window[0].y,
                x2: window[1].x,
                y2: window[1].y,
                color,
            });
        }
        if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
            ctx.draw(&CanvasLine {
                x1: last.x,
                y1: last.y,
                x2: first.x,
                y2: first.y,
                color,
            });
        }
    }
}

fn tui_color(color: zipmap_core::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
