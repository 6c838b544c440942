//! Map surface test double that records calls in order.

use std::cell::RefCell;
use std::rc::Rc;

use trip_viz::map::{ControlPosition, MapOptions, MapSurface, StrokeStyle, TileLayer};
use trip_viz::placement::PlacedMarker;
use trip_viz::viewport::FitRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Create {
        container: String,
        options: MapOptions,
    },
    TileLayer(TileLayer),
    ZoomControl(ControlPosition),
    Clear,
    Polyline {
        points: Vec<(f64, f64)>,
        style: StrokeStyle,
    },
    FitBounds(FitRequest),
    Marker(PlacedMarker),
    Destroy,
}

/// Shared so the log outlives the map that owns the surface.
pub type CallLog = Rc<RefCell<Vec<SurfaceCall>>>;

#[derive(Debug)]
pub struct RecordingSurface {
    log: CallLog,
}

impl RecordingSurface {
    pub fn log(&self) -> CallLog {
        Rc::clone(&self.log)
    }
}

impl MapSurface for RecordingSurface {
    type Container = str;

    fn create(container: &str, options: &MapOptions) -> Self {
        let call = SurfaceCall::Create {
            container: container.to_string(),
            options: options.clone(),
        };
        Self {
            log: Rc::new(RefCell::new(vec![call])),
        }
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.log.borrow_mut().push(SurfaceCall::TileLayer(layer.clone()));
    }

    fn add_zoom_control(&mut self, position: ControlPosition) {
        self.log.borrow_mut().push(SurfaceCall::ZoomControl(position));
    }

    fn clear_layers(&mut self) {
        self.log.borrow_mut().push(SurfaceCall::Clear);
    }

    fn draw_polyline(&mut self, points: &[(f64, f64)], style: &StrokeStyle) {
        self.log.borrow_mut().push(SurfaceCall::Polyline {
            points: points.to_vec(),
            style: style.clone(),
        });
    }

    fn fit_bounds(&mut self, request: &FitRequest) {
        self.log.borrow_mut().push(SurfaceCall::FitBounds(*request));
    }

    fn add_marker(&mut self, marker: &PlacedMarker) {
        self.log.borrow_mut().push(SurfaceCall::Marker(marker.clone()));
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().push(SurfaceCall::Destroy);
    }
}

/// Calls recorded since the last `Clear`.
pub fn since_last_clear(log: &CallLog) -> Vec<SurfaceCall> {
    let calls = log.borrow();
    let start = calls
        .iter()
        .rposition(|call| *call == SurfaceCall::Clear)
        .map(|i| i + 1)
        .unwrap_or(0);
    calls[start..].to_vec()
}
