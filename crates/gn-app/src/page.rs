//! The page adapter: the only seam that touches real page elements.

use std::collections::BTreeMap;

use gn_catalog::SeriesKey;
use gn_core::{Period, PeriodSet};
use gn_selection::{MenuModel, NavigationTarget};
use gn_zoom::{GeometryHints, OverlayFrame};

/// Everything the services need from a concrete page.
///
/// Implementations own the element references; the services never hold one.
/// A page missing an element implements the matching methods as silent
/// no-ops (and the readers as absent/empty), and the services degrade
/// accordingly instead of failing.
pub trait Page {
    fn path(&self) -> String;
    fn query(&self) -> String;
    fn alert(&mut self, message: &str);
    fn navigate(&mut self, target: &NavigationTarget);

    fn render_host_menu(&mut self, menu: &MenuModel);
    fn render_service_menu(&mut self, menu: &MenuModel);
    fn render_series_menu(
        &mut self,
        items: &[SeriesKey],
        selected: &[SeriesKey],
        visible: bool,
        rows: usize,
    );
    fn render_period_menu(&mut self, selected: PeriodSet);

    /// Current menu choices. The placeholder row reads back as `None`.
    fn host_choice(&self) -> Option<String>;
    fn service_choice(&self) -> Option<String>;
    fn series_choice(&self) -> Vec<SeriesKey>;
    fn period_choice(&self) -> PeriodSet;

    fn set_controls_expanded(&mut self, expanded: bool);
    fn controls_checkbox_checked(&self) -> bool;
    fn set_period_expanded(&mut self, period: Period, expanded: bool, indicator: &str);
    fn expanded_periods(&self) -> PeriodSet;
    fn set_geometry_choice(&mut self, geometry: Option<&str>);
    fn geometry_choice(&self) -> Option<String>;
    fn set_fixed_scale_checked(&mut self, checked: bool);
    fn fixed_scale_checked(&self) -> bool;

    /// The zoomable image, if the page has one right now.
    fn image_src(&self) -> Option<String>;
    fn set_image_src(&mut self, src: &str);
    fn image_original_src(&self) -> Option<String>;
    /// Remember the pre-zoom source. Write-once; later calls are no-ops.
    fn record_image_original_src(&mut self, src: &str);
    fn image_offset(&self) -> (f64, f64);
    fn image_size(&self) -> (f64, f64);
    fn geometry_hints(&self) -> GeometryHints;

    fn place_capture_panel(&mut self, frame: &OverlayFrame);
    fn show_selection_box(&mut self, frame: &OverlayFrame);
    fn hide_selection_box(&mut self);
    fn show_readout(&mut self, text: &str, at: (f64, f64));
    fn hide_readout(&mut self);
    fn show_popup(&mut self, url: &str, at: (f64, f64));
    fn hide_popup(&mut self);
}

/// The zoomable image of a [`MemoryPage`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryImage {
    pub src: String,
    pub original_src: Option<String>,
    pub offset: (f64, f64),
    pub size: (f64, f64),
    pub hints: GeometryHints,
    /// Every source the image has displayed, first entry first.
    pub src_history: Vec<String>,
}

impl MemoryImage {
    pub fn new(src: impl Into<String>, offset: (f64, f64), size: (f64, f64)) -> Self {
        let src = src.into();
        Self {
            src_history: vec![src.clone()],
            src,
            original_src: None,
            offset,
            size,
            hints: GeometryHints::default(),
        }
    }
}

/// In-memory [`Page`] for tests and the CLI: records everything the
/// services do to it and lets callers poke menu state the way a user would.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryPage {
    pub path: String,
    pub query: String,
    pub alerts: Vec<String>,
    pub navigations: Vec<NavigationTarget>,
    pub host_menu: MenuModel,
    pub service_menu: MenuModel,
    pub series_menu: Vec<SeriesKey>,
    pub series_selected: Vec<SeriesKey>,
    pub series_visible: bool,
    pub series_rows: usize,
    pub period_menu_choice: PeriodSet,
    pub controls_expanded: bool,
    pub expanded: PeriodSet,
    pub period_indicators: BTreeMap<String, String>,
    pub geometry_menu_choice: Option<String>,
    pub fixed_scale_box: bool,
    pub image: Option<MemoryImage>,
    pub capture_panel: Option<OverlayFrame>,
    pub selection_box: Option<OverlayFrame>,
    pub readout: Option<(String, (f64, f64))>,
    pub popup: Option<(String, (f64, f64))>,
}

impl MemoryPage {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self::new("/cgi-bin/graph.cgi", query)
    }
}

impl Page for MemoryPage {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn query(&self) -> String {
        self.query.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, target: &NavigationTarget) {
        self.navigations.push(target.clone());
    }

    fn render_host_menu(&mut self, menu: &MenuModel) {
        self.host_menu = menu.clone();
    }

    fn render_service_menu(&mut self, menu: &MenuModel) {
        self.service_menu = menu.clone();
    }

    fn render_series_menu(
        &mut self,
        items: &[SeriesKey],
        selected: &[SeriesKey],
        visible: bool,
        rows: usize,
    ) {
        self.series_menu = items.to_vec();
        self.series_selected = selected.to_vec();
        self.series_visible = visible;
        self.series_rows = rows;
    }

    fn render_period_menu(&mut self, selected: PeriodSet) {
        self.period_menu_choice = selected;
    }

    fn host_choice(&self) -> Option<String> {
        self.host_menu.selected_label().map(str::to_string)
    }

    fn service_choice(&self) -> Option<String> {
        self.service_menu.selected_label().map(str::to_string)
    }

    fn series_choice(&self) -> Vec<SeriesKey> {
        self.series_selected.clone()
    }

    fn period_choice(&self) -> PeriodSet {
        self.period_menu_choice
    }

    fn set_controls_expanded(&mut self, expanded: bool) {
        self.controls_expanded = expanded;
    }

    fn controls_checkbox_checked(&self) -> bool {
        self.controls_expanded
    }

    fn set_period_expanded(&mut self, period: Period, expanded: bool, indicator: &str) {
        if expanded {
            self.expanded.insert(period);
        } else {
            self.expanded.remove(period);
        }
        self.period_indicators
            .insert(period.name().to_string(), indicator.to_string());
    }

    fn expanded_periods(&self) -> PeriodSet {
        self.expanded
    }

    fn set_geometry_choice(&mut self, geometry: Option<&str>) {
        self.geometry_menu_choice = geometry.map(str::to_string);
    }

    fn geometry_choice(&self) -> Option<String> {
        self.geometry_menu_choice.clone()
    }

    fn set_fixed_scale_checked(&mut self, checked: bool) {
        self.fixed_scale_box = checked;
    }

    fn fixed_scale_checked(&self) -> bool {
        self.fixed_scale_box
    }

    fn image_src(&self) -> Option<String> {
        self.image.as_ref().map(|image| image.src.clone())
    }

    fn set_image_src(&mut self, src: &str) {
        if let Some(image) = &mut self.image {
            image.src = src.to_string();
            image.src_history.push(src.to_string());
        }
    }

    fn image_original_src(&self) -> Option<String> {
        self.image.as_ref().and_then(|image| image.original_src.clone())
    }

    fn record_image_original_src(&mut self, src: &str) {
        if let Some(image) = &mut self.image {
            if image.original_src.is_none() {
                image.original_src = Some(src.to_string());
            }
        }
    }

    fn image_offset(&self) -> (f64, f64) {
        self.image.as_ref().map(|image| image.offset).unwrap_or((0.0, 0.0))
    }

    fn image_size(&self) -> (f64, f64) {
        self.image.as_ref().map(|image| image.size).unwrap_or((0.0, 0.0))
    }

    fn geometry_hints(&self) -> GeometryHints {
        self.image
            .as_ref()
            .map(|image| image.hints)
            .unwrap_or_default()
    }

    fn place_capture_panel(&mut self, frame: &OverlayFrame) {
        self.capture_panel = Some(*frame);
    }

    fn show_selection_box(&mut self, frame: &OverlayFrame) {
        self.selection_box = Some(*frame);
    }

    fn hide_selection_box(&mut self) {
        self.selection_box = None;
    }

    fn show_readout(&mut self, text: &str, at: (f64, f64)) {
        self.readout = Some((text.to_string(), at));
    }

    fn hide_readout(&mut self) {
        self.readout = None;
    }

    fn show_popup(&mut self, url: &str, at: (f64, f64)) {
        self.popup = Some((url.to_string(), at));
    }

    fn hide_popup(&mut self) {
        self.popup = None;
    }
}
