use formbar::app::App;
use formbar::config::WidgetConfig;
use formbar::suggest::FunctionCatalog;
use formbar::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = WidgetConfig::default();
    let provider = FunctionCatalog::new(config.max_suggestions);
    let mut app = App::new(Box::new(provider), &config);

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
