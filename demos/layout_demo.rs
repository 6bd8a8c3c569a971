//! Demonstration of the full layout pipeline

use room_layout_graph::*;

fn main() -> Result<()> {
    println!("Generating layout...");

    let config = LayoutConfigBuilder::new()
        .seed(42)
        .level_size(LevelSize::Standard)
        .total_rooms(8)?
        .min_room_size(20)?
        .build()?;

    let layout = LevelLayout::generate(config)?;

    println!(
        "Generated {} rooms on a {}x{} level",
        layout.room_count(),
        config.width(),
        config.length()
    );
    if layout.unused_budget() > 0 {
        println!(
            "Could not reach the requested room count; {} rooms unplaced",
            layout.unused_budget()
        );
    }

    println!("\nPipeline statistics:");
    println!("  Triangles: {}", layout.triangles().len());
    println!("  Graph edges: {}", layout.spanning_tree().edges().len());
    println!("  Corridors: {}", layout.corridors().len());
    println!("  Total corridor length: {:.1}", layout.spanning_tree().total_weight());
    println!("  Fully connected: {}", layout.is_fully_connected());

    println!("\nRooms:");
    for (room, anchor) in layout.anchor_points().iter().enumerate() {
        println!(
            "  Room {:2} at ({:3}, {:3}) -> connects to {:?}",
            room,
            anchor.x,
            anchor.y,
            layout.connected_rooms(room)
        );
    }

    println!("\nDead-end rooms (special-room candidates): {:?}", layout.dead_end_rooms());
    println!("Rooms within 2 hops of room 0: {:?}", layout.rooms_within_hops(0, 2));

    Ok(())
}
