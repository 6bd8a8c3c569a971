//! Demonstration of the flattened graph export

use room_layout_graph::*;

fn main() -> Result<()> {
    println!("Generating layout...");

    let config = LayoutConfigBuilder::new()
        .seed(7)
        .level_size(LevelSize::Sprawling)
        .build()?;

    let layout = LevelLayout::generate(config)?;
    println!("Generated {} rooms", layout.room_count());

    let graph = build_layout_graph(&layout);

    println!("\nGraph statistics:");
    println!("  Rooms: {}", graph.room_count());
    println!("  Edges: {}", graph.edge_count());
    println!("  Corridors: {}", graph.corridor_count());

    // Memory estimate
    let mem_positions = graph.positions.len() * 8; // 2 floats * 4 bytes
    let mem_edges = graph.edges.len() * 8; // 2 indices * 4 bytes
    let mem_corridors = graph.corridors.len() * 8;
    let total = mem_positions + mem_edges + mem_corridors;
    println!("\nMemory usage:");
    println!("  Positions: {} bytes", mem_positions);
    println!("  Edges: {} bytes", mem_edges);
    println!("  Corridors: {} bytes", mem_corridors);
    println!("  Total: {} bytes", total);

    println!("\nCorridor list:");
    for pair in &graph.corridors {
        let a = graph.positions[pair[0] as usize];
        let b = graph.positions[pair[1] as usize];
        println!(
            "  {:2} -> {:2}  ({:3}, {:3}) to ({:3}, {:3})",
            pair[0], pair[1], a[0], a[1], b[0], b[1]
        );
    }

    Ok(())
}
