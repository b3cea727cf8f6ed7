use anyhow::{Context, Result, bail};
use layerboard::{EditorSettings, Layerboard};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: layerboard <snapshot.json>");
    };

    let mut app = Layerboard::new(EditorSettings::load_or_default());
    app.import_from_path(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let diagram = app.diagram();
    let viewport = app.viewport();
    println!(
        "{}: {} layers, {} nodes, {} connections (scale {:.2}, offset {:.1},{:.1})",
        path.display(),
        diagram.layers().len(),
        diagram.nodes().len(),
        diagram.connections().len(),
        viewport.scale,
        viewport.offset_x,
        viewport.offset_y,
    );

    for layer in diagram.layers() {
        let nodes = diagram.nodes().iter().filter(|n| n.layer_id == layer.id).count();
        let connections = diagram
            .visible_connections()
            .filter(|c| {
                diagram
                    .node(&c.from_node_id)
                    .is_some_and(|n| n.layer_id == layer.id)
            })
            .count();
        println!(
            "  {:<20} {:<8} {:>4} nodes  {:>4} outgoing  [{}]",
            layer.name,
            layer.color,
            nodes,
            connections,
            if layer.visible { "visible" } else { "hidden" },
        );
    }

    let dangling = diagram.connections().len() - diagram.visible_connections().count();
    if dangling > 0 {
        println!("  ({dangling} connections hidden or dangling)");
    }
    Ok(())
}
