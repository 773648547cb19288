// Municode - ui/panels/sections.rs
//
// Page sections around the dashboard: project summary, the per-mode
// comparison, the geographic notes, conclusions and the source footer.

use crate::core::aggregate::Stats;
use crate::core::filter::FilterMode;
use crate::core::format::format_average;
use crate::ui::theme;
use crate::util::constants::{CARD_DECIMALS, CURRENCY_LABEL};

pub fn about(ui: &mut egui::Ui) {
    ui.heading("О проекте");
    ui.label(
        "Этот проект анализирует взаимосвязь между экономическим развитием, \
         инфраструктурой и качеством жизни в арктических муниципалитетах России. \
         Мы исследуем, как близость к крупным городам влияет на экономическую \
         активность и развитие социальной инфраструктуры.",
    );
    ui.label(
        "Используя данные СберИндекса, Проектного офиса развития Арктики (ПОРА) \
         и открытых источников, мы выявляем паттерны развития и факторы, \
         определяющие успех муниципалитетов в условиях арктической экономики.",
    );
}

/// Averages for each filter mode in one grid.
pub fn mode_comparison(ui: &mut egui::Ui, by_mode: &[(FilterMode, Stats)]) {
    ui.strong("Сравнение экономических показателей");
    ui.label(
        egui::RichText::new(
            "Анализ различий в экономической активности между пригородами и \
             удаленными муниципалитетами",
        )
        .weak(),
    );
    ui.add_space(6.0);

    egui::Grid::new("mode_comparison_grid")
        .num_columns(5)
        .striped(true)
        .spacing([16.0, 4.0])
        .min_col_width(theme::VALUE_COLUMN_WIDTH)
        .show(ui, |ui| {
            ui.strong("Группа");
            ui.strong("Количество");
            ui.strong(format!("Выручка, {CURRENCY_LABEL}"));
            ui.strong(format!("Прибыль, {CURRENCY_LABEL}"));
            ui.strong(format!("Инвестиции, {CURRENCY_LABEL}"));
            ui.end_row();

            for (mode, stats) in by_mode {
                ui.label(mode.label());
                ui.label(stats.total.to_string());
                ui.monospace(format_average(stats.avg_revenue, CARD_DECIMALS));
                ui.monospace(format_average(stats.avg_profit, CARD_DECIMALS));
                ui.monospace(format_average(stats.avg_investment, CARD_DECIMALS));
                ui.end_row();
            }
        });
}

pub fn geography(ui: &mut egui::Ui) {
    ui.strong("Географическое распределение");
    ui.add_space(6.0);
    note(
        ui,
        "Пригороды (30-40 мин от крупного города)",
        "Муниципалитеты в пригородных зонах показывают более высокую экономическую \
         активность благодаря близости к крупным городам и доступу к рынкам.",
        theme::ACCENT_GREEN,
    );
    ui.add_space(8.0);
    note(
        ui,
        "Арктические муниципалитеты",
        "Муниципалитеты в Арктической зоне РФ сталкиваются с уникальными вызовами, \
         включая суровый климат, удаленность и ограниченную инфраструктуру. Однако \
         они часто имеют высокий потенциал благодаря природным ресурсам и \
         специальным программам развития.",
        theme::ACCENT_BLUE,
    );
}

fn note(ui: &mut egui::Ui, title: &str, body: &str, colour: egui::Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new(title).strong().color(colour));
        ui.label(body);
    });
}

const CONCLUSIONS: [&str; 4] = [
    "Близость к крупным городам является значительным фактором экономического \
     развития муниципалитетов.",
    "Арктические муниципалитеты демонстрируют разнообразие экономических моделей, \
     от ресурсоориентированных до диверсифицированных.",
    "Инвестиции в инфраструктуру (детские сады, медицинские учреждения, спортивные \
     объекты) коррелируют с качеством жизни.",
    "Развитие розничной торговли (федеральные сети) служит индикатором рыночной \
     развитости и потребительской активности.",
];

pub fn conclusions(ui: &mut egui::Ui) {
    ui.heading("Выводы");
    for point in CONCLUSIONS {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("\u{2022}").strong().color(theme::ACCENT_GREEN));
            ui.label(point);
        });
    }
}

pub fn footer(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Данные: СберИндекс, ПОРА (Проектный офис развития Арктики)")
                .weak(),
        );
        ui.label(
            egui::RichText::new(
                "Конкурс СберИндекса \"Муниципальный код\" | Номинация: Визуализация \
                 данных и инфографика",
            )
            .weak(),
        );
        ui.label(egui::RichText::new("Автор: Лысов Илья").small().weak());
    });
}
