//! Flappy entry point
//!
//! The native binary runs a headless demo: the autopilot plays for a fixed
//! stretch of simulated time and the outcome is logged. Windowing, drawing
//! and audio output belong to a host that embeds [`flappy_sim::App`].

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_sim::audio::SoundEffect;
    use flappy_sim::consts::SIM_DT;
    use flappy_sim::renderer::texture_paths;
    use flappy_sim::sim::GamePhase;
    use flappy_sim::sim::autopilot::wants_flap;
    use flappy_sim::{App, FilePlatform, Settings};

    env_logger::init();
    log::info!("Flappy (native) starting...");

    let settings = Settings::load();
    let seed = settings.resolved_seed();
    let platform = FilePlatform::new(settings.data_dir.clone());
    for (texture, path) in texture_paths(&platform) {
        if !path.exists() {
            log::warn!("Missing texture {:?} at {}", texture, path.display());
        }
    }

    let mut app = App::new(seed, Some(Box::new(platform)), Some(settings.debug_state()));
    settings.apply_audio(app.audio_mut());

    let frames = (settings.demo_seconds.max(0.0) / SIM_DT).round() as u64;
    let mut runs = 0u32;
    let mut best = 0u32;
    let mut flaps = 0usize;
    let mut last_phase = app.state().phase();
    let mut last_score = 0;

    for _ in 0..frames {
        if wants_flap(app.state()) {
            app.press();
        } else {
            app.release();
        }

        let drawables = app.advance(SIM_DT);
        log::trace!("{} drawables", drawables.len());

        flaps += app
            .audio_mut()
            .drain()
            .iter()
            .filter(|(effect, _)| *effect == SoundEffect::Flap)
            .count();

        let phase = app.state().phase();
        if phase == GamePhase::Idle && last_phase != GamePhase::Idle {
            runs += 1;
            log::info!("Run {} ended with score {}", runs, last_score);
        }
        last_phase = phase;
        last_score = app.state().score;
        best = best.max(last_score);
    }

    println!(
        "Demo finished: {:.1}s simulated, seed {}, {} finished runs, best score {}, {} flaps, high score {}",
        settings.demo_seconds,
        seed,
        runs,
        best,
        flaps,
        app.persistent().high_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Embedders drive flappy_sim::App directly on the web
}
