#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    use petri::config::*;
    use petri::game::camera::Viewport;
    use petri::game::engine;
    use rand::Rng;
    use std::time::Duration;

    tracing_subscriber::fmt::init();

    let world = engine::create_world();
    let input = engine::create_input();
    println!("✅ Game world created ({}x{})", WORLD_WIDTH, WORLD_HEIGHT);

    let viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    let loop_world = world.clone();
    let loop_input = input.clone();
    tokio::spawn(async move {
        engine::game_loop(loop_world, loop_input, viewport).await;
    });
    println!("🎮 Headless session running at {} TPS", TICK_RATE);

    // Stand-in for a human: retarget the pointer every couple of seconds,
    // occasionally split, and report the score.
    loop {
        tokio::time::sleep(Duration::from_secs(2)).await;

        let (px, py, split) = {
            let mut rng = rand::thread_rng();
            (
                rng.gen_range(0.0..viewport.width),
                rng.gen_range(0.0..viewport.height),
                rng.gen_bool(0.2),
            )
        };
        {
            let mut input = input.lock().unwrap();
            input.set_pointer(px, py);
            if split {
                input.request_split();
            }
        }

        let world = world.read().await;
        tracing::info!(
            score = world.score.floor(),
            cells = world.players.len(),
            food = world.food.len(),
            "session report"
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
