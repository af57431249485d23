//! Classifies a few sample sentences (or the CLI arguments) and prints reports.

use fuzzy_sentiment::report;

const SAMPLES: [&str; 7] = [
    "O livro é incrível e maravilhoso",
    "Não gostei deste filme",
    "Nada de bom aconteceu",
    "Completamente feliz com o resultado",
    "O atendimento foi péssimo e frustrante",
    "Nem gostei, nem me apaixonei pelo livro",
    "Esse restaurante é fantástico e o atendimento é excelente",
];

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_target(false).init();

    let classifier = fuzzy_sentiment::classifier_from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let texts: Vec<&str> = if args.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for text in texts {
        let out = classifier.classify(text)?;
        println!("{}", report::render(text, &out));
    }
    Ok(())
}
