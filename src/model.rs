use progrun::ProgramResult;

#[derive(Clone, Debug, Default, PartialEq, YaDeserialize, YaSerialize)]
#[yaserde(rename = "arg")]
pub struct Argument {
    #[yaserde(text)]
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, YaDeserialize, YaSerialize)]
#[yaserde(rename = "program-result")]
pub struct ProgramReport {
    #[yaserde(attribute, rename = "exit-code")]
    pub exit_code: i32,
    #[yaserde(attribute, rename = "program-path")]
    pub program_path: String,
    #[yaserde(attribute)]
    pub time: f32,
    #[yaserde(attribute)]
    pub timestamp: String,
    #[yaserde(rename = "arg")]
    pub args: Vec<Argument>,
    pub stdout: String,
    pub stderr: String,
    pub error: Option<String>,
}

impl ProgramReport {
    pub fn new(result: &ProgramResult, timestamp: String, time: f32) -> Self {
        ProgramReport {
            exit_code: result.exit_code(),
            program_path: result.program_path().display().to_string(),
            time,
            timestamp,
            args: result
                .cmd_line()
                .as_slice()
                .iter()
                .map(|value| Argument {
                    value: value.clone(),
                })
                .collect(),
            stdout: result.stdout().to_string(),
            stderr: result.stderr().to_string(),
            error: result.error_msg().map(str::to_string),
        }
    }
}
