use handwrite_gen::output::save_pages;
use handwrite_gen::pdf::{write_pdf, Info};
use handwrite_gen::{colours, handwrite, Settings};

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(font), Some(text)) = (args.next(), args.next()) else {
        eprintln!("usage: handwrite <font.ttf> <text.txt> [output dir]");
        std::process::exit(2);
    };
    let out_dir = args.next().unwrap_or_else(|| "outputs".to_string());

    let text = std::fs::read_to_string(text).expect("can read text");
    let rate = 2;
    let settings = Settings::default()
        .with_font_file(font)
        .with_rate(rate)
        .with_background(colours::WHITE)
        .with_seed(42);

    let pages = handwrite(&text, &settings).expect("can write text");
    let saved = save_pages(&pages, &out_dir).expect("can save pages");
    for (index, path) in &saved {
        println!("page {index}: {}", path.display());
    }

    let mut info = Info::new();
    info.title("Handwriting demo");
    let pdf = std::path::Path::new(&out_dir).join("handwriting.pdf");
    let file = std::fs::File::create(&pdf).expect("can create pdf");
    write_pdf(&pages, 96.0 * rate as f32, Some(&info), std::io::BufWriter::new(file))
        .expect("can write pdf");
    println!("pdf: {}", pdf.display());
}
