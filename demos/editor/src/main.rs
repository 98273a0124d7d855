use argh::FromArgs;
use std::path::PathBuf;

use imgedit::editor::{
    controls::controls, dispatch_localized, DisplayImage, EditorError, Locale, OperationRequest,
    ParamKind,
};
use imgedit::io::functional as F;

#[derive(FromArgs)]
/// Apply one editor operation to an image and save the result
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    image_path: Option<PathBuf>,

    /// path of the processed image (png or jpeg)
    #[argh(option, short = 'o')]
    output_path: Option<PathBuf>,

    /// load the input as a single channel image
    #[argh(switch)]
    grayscale_input: bool,

    /// operation category, e.g. geometric-transform
    #[argh(option)]
    category: Option<String>,

    /// operation inside the category, e.g. rotation
    #[argh(option)]
    sub_option: Option<String>,

    /// contrast factor
    #[argh(option)]
    contrast: Option<f32>,

    /// horizontal shift in pixels
    #[argh(option)]
    dx: Option<f32>,

    /// vertical shift in pixels
    #[argh(option)]
    dy: Option<f32>,

    /// rotation angle in degrees
    #[argh(option)]
    angle: Option<f32>,

    /// scale factor
    #[argh(option)]
    scale: Option<f32>,

    /// gamma value
    #[argh(option)]
    gamma: Option<f32>,

    /// json file holding a full request; flags override its values
    #[argh(option)]
    request: Option<PathBuf>,

    /// language of the description: en or pt
    #[argh(option, default = "Locale::English", from_str_fn(parse_locale))]
    locale: Locale,

    /// print the available controls as json and exit
    #[argh(switch)]
    list_controls: bool,
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    value.parse().map_err(|e: EditorError| e.to_string())
}

fn build_request(args: &Args) -> Result<OperationRequest, Box<dyn std::error::Error>> {
    let mut request = match &args.request {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => OperationRequest::default(),
    };

    if let Some(category) = &args.category {
        request.category = Some(category.parse()?);
    }
    if let Some(sub_option) = &args.sub_option {
        request.sub_option = Some(sub_option.parse()?);
    }

    let flags = [
        (ParamKind::Contrast, args.contrast),
        (ParamKind::Dx, args.dx),
        (ParamKind::Dy, args.dy),
        (ParamKind::Angle, args.angle),
        (ParamKind::Scale, args.scale),
        (ParamKind::Gamma, args.gamma),
    ];
    for (kind, value) in flags {
        if let Some(value) = value {
            request.params.set(kind, value);
        }
    }

    // keep the values inside the slider ranges, non-finite values are rejected later
    for kind in ParamKind::ALL {
        let spec = kind.spec();
        let value = request.params.get(kind);
        if value.is_finite() && !spec.contains(value) {
            let clamped = spec.clamp(value);
            log::warn!(
                "{} = {} is outside [{}, {}], using {}",
                spec.name,
                value,
                spec.min,
                spec.max,
                clamped
            );
            request.params.set(kind, clamped);
        }
    }

    Ok(request)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if args.list_controls {
        println!("{}", serde_json::to_string_pretty(&controls(args.locale))?);
        return Ok(());
    }

    let Some(image_path) = &args.image_path else {
        return Err("an input image is required, see --help".into());
    };

    let request = build_request(&args)?;
    log::info!("request: {:?}", request);

    let image = if args.grayscale_input {
        DisplayImage::Gray8(F::read_image_any_mono8(image_path)?)
    } else {
        DisplayImage::Rgb8(F::read_image_any_rgb8(image_path)?)
    };
    log::info!(
        "loaded {} with size {} and {} channel(s)",
        image_path.display(),
        image.size(),
        image.num_channels()
    );

    let result = dispatch_localized(&image, &request, args.locale)?;
    println!("{}", result.description);

    if let Some(output_path) = &args.output_path {
        match &result.image {
            DisplayImage::Rgb8(rgb) => F::write_image_rgb8(output_path, rgb)?,
            DisplayImage::Gray8(gray) => F::write_image_mono8(output_path, gray)?,
        }
        log::info!("wrote {}", output_path.display());
    }

    Ok(())
}
