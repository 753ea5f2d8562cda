//! geo-form Application - side menu + content pane
//!
//! Layout:
//! ┌────────┬──────────────────────────┐
//! │ Form   │                          │
//! │ Address│   active view            │
//! │ Info   │   (form / map / summary) │
//! └────────┴──────────────────────────┘

use std::sync::Arc;

use eframe::egui;
use geo_form_types::{GeoPoint, ViewMode};

use crate::api::{GeocodeBackend, NominatimClient};
use crate::config::GeoFormConfig;
use crate::map::MapView;
use crate::panels::{address_panel, form_panel, info_panel, side_menu, FieldEdit};
use crate::resolver::{LocationResolver, LookupQueue};
use crate::state::ViewController;

const MENU_FILL: egui::Color32 = egui::Color32::from_rgb(146, 64, 14);
const CONTENT_FILL: egui::Color32 = egui::Color32::from_rgb(255, 231, 151);
const CONTENT_TEXT: egui::Color32 = egui::Color32::from_rgb(60, 30, 5);

fn geocoder(config: &GeoFormConfig) -> Arc<dyn GeocodeBackend> {
    Arc::new(NominatimClient::new(&config.geocoder_url, &config.user_agent))
}

/// Main application state
pub struct GeoFormApp {
    config: GeoFormConfig,

    // Single source of truth for record / view / marker
    controller: ViewController,

    // Click -> reverse geocode
    resolver: LocationResolver,
    lookups: LookupQueue,

    // Map camera (UI-only)
    map: MapView,

    // Keeps lookup tasks alive for native builds
    #[cfg(not(target_arch = "wasm32"))]
    _runtime: Arc<tokio::runtime::Runtime>,
}

impl GeoFormApp {
    #[cfg(target_arch = "wasm32")]
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GeoFormConfig) -> Self {
        let resolver = LocationResolver::new(geocoder(&config));
        Self {
            controller: ViewController::new(),
            resolver,
            lookups: LookupQueue::new(),
            map: MapView::new(config.map_center, config.map_zoom),
            config,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: GeoFormConfig,
        runtime: Arc<tokio::runtime::Runtime>,
    ) -> Self {
        let resolver = LocationResolver::new(geocoder(&config), runtime.handle().clone());
        Self {
            controller: ViewController::new(),
            resolver,
            lookups: LookupQueue::new(),
            map: MapView::new(config.map_center, config.map_zoom),
            config,
            _runtime: runtime,
        }
    }

    // =========================================================================
    // EVENT HANDLERS
    // =========================================================================

    fn handle_point_selected(&mut self, point: GeoPoint) {
        let pending = self.resolver.on_point_selected(&mut self.controller, point);
        self.lookups.push(pending);
    }

    fn handle_field_edit(&mut self, edit: FieldEdit) {
        self.controller.update_field(edit.field, edit.value);
    }

    // =========================================================================
    // ASYNC RESULT HANDLING
    // =========================================================================

    fn check_pending_lookups(&mut self) {
        if !self.lookups.is_empty() {
            self.lookups.apply_completed(&mut self.controller);
        }
    }
}

impl eframe::App for GeoFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_pending_lookups();

        // Keep polling while lookups are in flight so completion is seen
        if let Some(delay) = self.lookups.repaint_after() {
            ctx.request_repaint_after(delay);
        }

        // =====================================================================
        // SIDE MENU
        // =====================================================================
        let mut picked_view: Option<ViewMode> = None;
        egui::SidePanel::left("view_menu")
            .resizable(false)
            .exact_width(180.0)
            .frame(egui::Frame::none().fill(MENU_FILL).inner_margin(16.0))
            .show(ctx, |ui| {
                picked_view = side_menu(ui, self.controller.view_mode());
            });
        if let Some(mode) = picked_view {
            self.controller.select_view(mode);
        }

        // =====================================================================
        // CONTENT
        // =====================================================================
        let mut field_edit: Option<FieldEdit> = None;
        let mut picked_point: Option<GeoPoint> = None;

        let content_frame = match self.controller.view_mode() {
            ViewMode::Address => egui::Frame::none(),
            ViewMode::Form | ViewMode::Info => {
                egui::Frame::none().fill(CONTENT_FILL).inner_margin(24.0)
            }
        };

        egui::CentralPanel::default()
            .frame(content_frame)
            .show(ctx, |ui| match self.controller.view_mode() {
                ViewMode::Form => {
                    ui.visuals_mut().override_text_color = Some(CONTENT_TEXT);
                    ui.visuals_mut().extreme_bg_color = egui::Color32::WHITE;
                    field_edit = form_panel(ui, self.controller.record());
                }
                ViewMode::Address => {
                    picked_point = address_panel(
                        ui,
                        &mut self.map,
                        &self.controller,
                        self.config.show_lookup_errors,
                    );
                }
                ViewMode::Info => {
                    ui.visuals_mut().override_text_color = Some(CONTENT_TEXT);
                    info_panel(ui, self.controller.record());
                }
            });

        if let Some(edit) = field_edit {
            self.handle_field_edit(edit);
        }
        if let Some(point) = picked_point {
            self.handle_point_selected(point);
        }
    }
}
