use std::sync::{Arc, Mutex};
use std::time::Duration;

use markerfit::{
    DisplaySurface, GeoPoint, MapCoordinator, Marker, RefreshHandle, Region, SurfaceEvent,
};

/// Example of driving the coordinator without any UI: every surface call is
/// printed instead of rendered.
struct ConsoleSurface;

impl DisplaySurface for ConsoleSurface {
    fn attach(&mut self, marker: &Marker) {
        println!(
            "   + attach {} at {:.4}, {:.4}",
            marker.id(),
            marker.position().lat(),
            marker.position().lng()
        );
    }

    fn detach(&mut self, marker_id: &str) {
        println!("   - detach {marker_id}");
    }

    fn set_viewpoint(&mut self, region: &Region, padding: f64) {
        println!(
            "   > viewpoint lat [{:.4}, {:.4}] lng [{:.4}, {:.4}] padding {padding}",
            region.south(),
            region.north(),
            region.west(),
            region.east()
        );
    }
}

#[tokio::main]
async fn main() -> markerfit::Result<()> {
    env_logger::init();

    println!("Markerfit headless example");
    println!("==========================");

    let mut coordinator = MapCoordinator::new(ConsoleSurface);

    println!("\nGenerating the initial marker batch:");
    coordinator.regenerate()?;
    println!("   {} markers placed", coordinator.markers().len());

    println!("\nSimulating a long-press:");
    let dropped = GeoPoint::new(37.6, -122.1)?;
    coordinator.handle_event(SurfaceEvent::LongPress { point: dropped })?;

    println!("\nFitting the camera to the current markers:");
    coordinator.handle_event(SurfaceEvent::FitRequested)?;

    println!("\nRunning the periodic refresh for two ticks:");
    let coordinator = Arc::new(Mutex::new(coordinator));
    let refresh = RefreshHandle::spawn(coordinator.clone(), Duration::from_millis(400));
    tokio::time::sleep(Duration::from_millis(1000)).await;
    refresh.cancel();

    let coordinator = coordinator
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    println!(
        "\nDone. Final marker count: {}",
        coordinator.markers().len()
    );

    Ok(())
}
