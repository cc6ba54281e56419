use crate::components::metadata_form::{FieldConfig, MetadataFormComponent};
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let fields = vec![
            FieldConfig {
                term: "modelProgramLanguage".to_string(),
                label: "Programming languages".to_string(),
                options: ["C", "C++", "Fortran", "Java", "MATLAB", "Python", "R"]
                    .map(str::to_string)
                    .to_vec(),
                help: Some("Programming languages the model program is written in.".to_string()),
            },
            FieldConfig {
                term: "modelOperatingSystem".to_string(),
                label: "Operating systems".to_string(),
                options: ["Linux", "macOS", "Unix", "Windows"].map(str::to_string).to_vec(),
                help: Some("Operating systems the model program runs on.".to_string()),
            },
            FieldConfig {
                term: "modelOutputTypes".to_string(),
                label: "Output types".to_string(),
                options: ["CSV", "NetCDF", "Shapefile", "Text"].map(str::to_string).to_vec(),
                help: None,
            },
        ];

        html! {
            <div>
                <MetadataFormComponent edit_mode={true} {fields} />
            </div>
        }
    }
}
