// src/app.rs
//
// AutoCalc — module App (racine)
// ------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Enter (copie) est géré dans vue.rs, là où l’on sait si le champ a le focus.
// - L’horloge vient d’egui (`i.time`) et est passée aux actions d’état.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // notice expirée ?
        self.tick(maintenant);

        // Raccourcis globaux :
        // - ESC = reset (saisie + notice)
        // - F2  = base suivante
        let (esc, f2) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::F2),
            )
        });
        if esc {
            self.reset(maintenant);
        }
        if f2 {
            self.basculer_base(maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant);
        });

        // sans événement, egui ne redessine pas : on se réveille pour effacer la notice
        if let Some(reste) = self.notice_restante(maintenant) {
            ctx.request_repaint_after(Duration::from_secs_f64(reste));
        }
    }
}
