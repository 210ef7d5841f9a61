use std::io::Error;

#[derive(Debug, Clone)]
pub struct CmdArgs {
    pub config: String,
}

impl CmdArgs {
    pub fn parse(args: Vec<String>) -> Result<Self, Error> {
        let mut config = String::from("./config.json");
        {
            let mut ap = argparse::ArgumentParser::new();
            ap.set_description("Classified-ads listing monitor");
            ap.refer(&mut config).add_option(
                &["-c", "--config"],
                argparse::Store,
                "Config file path",
            );

            match ap.parse(args, &mut std::io::stdout(), &mut std::io::stderr()) {
                Ok(()) => {}
                Err(_) => {
                    return Err(Error::from(std::io::ErrorKind::InvalidInput));
                }
            }
        }

        Ok(CmdArgs { config })
    }
}
