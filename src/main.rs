use anyhow::{bail, Context};
use dotenv::dotenv;
use opentdb::{config::Config, Encoding, Quiz, ResponseCode, TriviaClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenv() {
        eprintln!("{:?}", e);
        eprintln!(".env file missing, using env variables")
    }

    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::from_env()?;
    tracing::debug!("{:?}", config);

    let client = TriviaClient::with_base_url(&config.base_url);

    let token = if config.use_token {
        let response = client.request_token().await?;

        if !response.response_code.is_success() {
            bail!("could not get a session token: {}", response.response_code);
        }

        Some(response.token)
    } else {
        None
    };

    let params = config
        .trivia_params(token)?
        .with_encoding(Encoding::Base64);

    let response = client.fetch_questions(&params).await?;
    tracing::debug!("{} bytes from {}", response.bytes().len(), response.url());

    let response = response.json()?;

    match response.response_code {
        ResponseCode::Success => (),
        ResponseCode::NoResults => {
            bail!("not enough questions for this category/difficulty/type combination")
        }
        code => bail!("OpenTDB returned {}", code),
    }

    let questions = response
        .results
        .iter()
        .map(|question| question.decoded(Encoding::Base64))
        .collect::<Result<Vec<_>, _>>()
        .context("failed to decode questions")?;

    let output = serde_json::to_string(&questions)?;

    for round in Quiz::new(questions).rounds() {
        tracing::debug!("\n{}", round);
    }

    println!("{}", output);

    Ok(())
}
