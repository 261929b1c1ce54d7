#[cfg(feature = "cairo-backend")]
use linechart_rs::api::{ChartEngine, ChartEngineConfig, ChartEvent, parse_chart_groups};
#[cfg(feature = "cairo-backend")]
use linechart_rs::render::CairoRenderer;
#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_DIR: &str = "target/chart_png";

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    payload_path: PathBuf,
    config_path: Option<PathBuf>,
    output_dir: PathBuf,
    only_group: Option<String>,
    hover_x: Option<f64>,
    zoom: Option<f64>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = linechart_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.payload_path).map_err(|err| {
        format!(
            "failed to read payload `{}`: {err}",
            args.payload_path.display()
        )
    })?;
    let groups = parse_chart_groups(&raw).map_err(|err| err.to_string())?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartEngineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartEngineConfig::default(),
    };

    let width = i32::try_from(config.viewport.width)
        .map_err(|_| "viewport width overflows i32".to_owned())?;
    let height = i32::try_from(config.viewport.height)
        .map_err(|_| "viewport height overflows i32".to_owned())?;

    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    let mut rendered = 0usize;
    for (name, input) in groups {
        if args.only_group.as_ref().is_some_and(|only| only != &name) {
            continue;
        }

        let renderer = CairoRenderer::new(width, height)
            .map_err(|err| format!("group `{name}` renderer init failed: {err}"))?;
        let mut engine = ChartEngine::new(renderer, config.clone())
            .map_err(|err| format!("group `{name}` engine init failed: {err}"))?;
        let plot = engine.plot_area();

        let mut events = vec![ChartEvent::DataChanged(Some(input))];
        if let Some(factor) = args.zoom {
            events.push(ChartEvent::Zoom {
                factor,
                anchor_x: plot.left + plot.inner_width / 2.0,
            });
        }
        if let Some(x) = args.hover_x {
            events.push(ChartEvent::PointerMove {
                x,
                y: plot.top + plot.inner_height / 2.0,
            });
        }
        for event in events {
            engine
                .handle_event(event)
                .map_err(|err| format!("group `{name}` event failed: {err}"))?;
        }

        let output_path = args.output_dir.join(format!("{name}.png"));
        let mut file = File::create(&output_path).map_err(|err| {
            format!("failed to create png `{}`: {err}", output_path.display())
        })?;
        let renderer = engine.into_renderer();
        renderer
            .write_png(&mut file)
            .map_err(|err| format!("failed to write png `{}`: {err}", output_path.display()))?;

        rendered += 1;
        println!("rendered {name} -> {}", output_path.display());
    }

    if rendered == 0 {
        return Err("no chart group rendered".to_owned());
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut payload_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut only_group: Option<String> = None;
    let mut hover_x: Option<f64> = None;
    let mut zoom: Option<f64> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--payload" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --payload".to_owned())?;
                payload_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--only" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --only".to_owned())?;
                only_group = Some(value);
            }
            "--hover-x" => {
                hover_x = Some(parse_f64_arg(args.next(), "--hover-x")?);
            }
            "--zoom" => {
                zoom = Some(parse_f64_arg(args.next(), "--zoom")?);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let payload_path =
        payload_path.ok_or_else(|| format!("missing --payload\n\n{}", usage_message()))?;
    Ok(CliArgs {
        payload_path,
        config_path,
        output_dir,
        only_group,
        hover_x,
        zoom,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_f64_arg(value: Option<String>, flag: &str) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<f64>()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_chart_png -- --payload <path> [options]\n\nOptions:\n  --payload <path>       Chart group payload (JSON)\n  --config <path>        Engine config (JSON, default config when omitted)\n  --output-dir <path>    Output directory (default: {DEFAULT_OUTPUT_DIR})\n  --only <group>         Render a single group by name\n  --hover-x <px>         Simulate a pointer at surface x\n  --zoom <factor>        Zoom around the plot center\n  -h, --help             Show this message"
    )
}
