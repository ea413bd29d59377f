use verve::hud::{COMBO_MESSAGES, ScoreDisplay};
use verve::menu::{MenuEvent, MenuFlow};
use verve::types::{Color, Vec2, Vec3};
use verve::ui::theme::{ElementRole, ThemeManager, ThemePreset};
use verve::ui::{ButtonEvent, ButtonFx, ButtonStyle, SoundCue, Visual};

const DT: f32 = 1.0 / 60.0;

#[test]
fn button_press_and_release_settle_back_to_rest() {
    let mut button = ButtonFx::new(ButtonStyle::default());
    button.pointer_down(Vec2::ZERO);

    for _ in 0..60 {
        button.advance(DT);
    }
    assert!((button.visual().scale.x - 0.95).abs() < 1e-3, "pressed scale");

    button.pointer_up();
    for _ in 0..120 {
        button.advance(DT);
    }
    assert!((button.visual().scale.x - 1.0).abs() < 1e-3, "rest scale");
}

#[test]
fn button_hover_emits_a_hover_cue_once() {
    let mut button = ButtonFx::new(ButtonStyle::default());
    button.pointer_enter();

    let events = button.take_events();
    assert_eq!(events, vec![ButtonEvent::Sound(SoundCue::Hover)]);
}

#[test]
fn score_counts_up_to_the_target_and_stops() {
    let mut display = ScoreDisplay::new();
    display.add_score(1000);

    let mut last = 0;
    for _ in 0..600 {
        display.advance(DT);
        let now = display.displayed_score();
        assert!(now >= last, "displayed score is monotonic");
        last = now;
    }

    assert_eq!(display.displayed_score(), 1000);
    assert!(!display.is_counting());
    assert_eq!(display.score_text(), "1,000");
}

#[test]
fn add_score_pops_the_score_text() {
    let mut display = ScoreDisplay::new();
    display.add_score(10);

    display.advance(0.05);
    assert!(
        display.score_visual().scale.x > 1.0,
        "score text scales up during the pop"
    );

    for _ in 0..60 {
        display.advance(DT);
    }
    assert_eq!(display.score_visual().scale, Vec3::ONE, "pop restores scale");
}

#[test]
fn combo_threshold_shows_a_message_then_restores_the_counter() {
    let mut display = ScoreDisplay::new();
    for _ in 0..5 {
        display.increment_combo();
    }
    assert_eq!(display.combo_text(), COMBO_MESSAGES[0]);

    // The flash lasts 1.5s; afterwards the regular counter returns.
    for _ in 0..100 {
        display.advance(DT);
    }
    assert_eq!(display.combo_text(), "Combo x5");
    assert_eq!(display.combo_visual().scale, Vec3::ONE);
}

#[test]
fn combo_fill_tracks_the_count() {
    let mut display = ScoreDisplay::new();
    assert_eq!(display.combo_fill(), 0.0);

    for _ in 0..50 {
        display.increment_combo();
    }
    assert!((display.combo_fill() - 0.5).abs() < 1e-6);

    display.reset_combo();
    assert_eq!(display.combo_fill(), 0.0);
    assert_eq!(display.combo_text(), "");
}

#[test]
fn menu_gates_activation_behind_progress_and_a_key_press() {
    let mut menu = MenuFlow::new("1.0.0");
    menu.load_scene("Gameplay");
    assert!(menu.loading_panel_visible());
    menu.take_events();

    menu.advance(0.2);
    assert_eq!(
        menu.take_events(),
        vec![MenuEvent::BeginLoad {
            scene: "Gameplay".to_string()
        }]
    );

    menu.set_load_progress(0.5);
    menu.advance(DT);
    menu.any_key_pressed();
    assert!(
        menu.take_events().is_empty(),
        "no activation below the progress gate"
    );

    menu.set_load_progress(0.9);
    menu.advance(DT);
    assert_eq!(menu.loading_label(), "Press any key to continue");

    menu.any_key_pressed();
    assert_eq!(
        menu.take_events(),
        vec![MenuEvent::ActivateScene {
            scene: "Gameplay".to_string()
        }]
    );
    assert!(!menu.loading_panel_visible());
}

#[test]
fn menu_theme_change_updates_manager_and_emits_feedback() {
    let mut menu = MenuFlow::new("1.0.0");
    let mut themes = ThemeManager::new(ThemePreset::Modern);
    menu.change_theme(1, &mut themes);

    assert_eq!(themes.preset(), ThemePreset::Sunset);
    let events = menu.take_events();
    assert!(events.contains(&MenuEvent::Sound(SoundCue::ThemeChange)));
    assert!(events.contains(&MenuEvent::PulseThemeButton { index: 1 }));
}

#[test]
fn menu_quit_and_open_url_surface_intents() {
    let mut menu = MenuFlow::new("1.0.0");
    menu.quit();
    menu.open_url("https://example.com");

    let events = menu.take_events();
    assert!(events.contains(&MenuEvent::Quit));
    assert!(events.contains(&MenuEvent::OpenUrl {
        url: "https://example.com".to_string()
    }));
}

#[test]
fn theme_roles_paint_elements_from_the_active_palette() {
    let mut themes = ThemeManager::new(ThemePreset::Modern);
    let mut background = Visual::new();
    let mut label = Visual::new();

    themes.apply(ElementRole::Background, &mut background);
    themes.apply(ElementRole::TextSecondary, &mut label);
    assert_eq!(background.color, Color::rgb(0.1, 0.1, 0.15));
    assert_eq!(label.color, Color::rgb(0.8, 0.8, 0.8));

    themes.set_preset(ThemePreset::Forest);
    themes.apply(ElementRole::Background, &mut background);
    assert_eq!(background.color, Color::rgb(0.1, 0.12, 0.08));
}

#[test]
fn accent_pulse_breathes_around_the_accent_color() {
    let mut themes = ThemeManager::new(ThemePreset::Sunset);
    let accent = themes.palette().accent;

    let mut saw_brighter = false;
    let mut saw_darker = false;
    for _ in 0..240 {
        themes.advance(DT);
        let pulsed = themes.pulsed_accent();
        if pulsed.g > accent.g {
            saw_brighter = true;
        }
        if pulsed.g < accent.g {
            saw_darker = true;
        }
    }
    assert!(saw_brighter && saw_darker, "pulse oscillates both ways");
}
