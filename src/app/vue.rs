// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Résultat recalculé à chaque frappe (resp.changed())
// - Clavier : Enter copie le résultat (quand le champ est focus)
// - Boutons : base (DEC/HEX/BIN), C (reset), Copier
// - Couleur du résultat : vert si OK, rouge si "Error"
//
// Échap / F2 sont gérés globalement dans app.rs.

use eframe::egui;

use super::etat::AppCalc;

const COULEUR_OK: egui::Color32 = egui::Color32::from_rgb(90, 158, 34);
const COULEUR_ERREUR: egui::Color32 = egui::Color32::from_rgb(187, 82, 82);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_entree(ui, maintenant);

        ui.add_space(6.0);

        self.ui_resultat(ui);

        ui.add_space(6.0);

        self.ui_actions(ui, maintenant);

        if !self.notice.is_empty() {
            ui.add_space(4.0);
            ui.weak(&self.notice);
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (FFH - 1010Z) x 2")
                .id_salt("entree_formule")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        if resp.changed() {
            self.rafraichir(maintenant);
        }

        // Enter : un TextEdit mono-ligne perd le focus sur Enter
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.copier_vers_presse_papiers(ui.ctx(), maintenant);
        }
    }

    fn ui_resultat(&self, ui: &mut egui::Ui) {
        let couleur = if self.sortie.est_erreur() {
            COULEUR_ERREUR
        } else {
            COULEUR_OK
        };

        ui.push_id("resultat", |ui| {
            ui.set_min_height(ui.text_style_height(&egui::TextStyle::Heading));
            ui.label(
                egui::RichText::new(self.sortie.texte())
                    .monospace()
                    .size(22.0)
                    .color(couleur),
            );
        });
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.horizontal(|ui| {
            let base = ui
                .add_sized([56.0, 28.0], egui::Button::new(self.base.libelle()))
                .on_hover_text("Base d’affichage (F2)");
            if base.clicked() {
                self.basculer_base(maintenant);
            }

            let c = ui
                .add_sized([40.0, 28.0], egui::Button::new("C"))
                .on_hover_text("Efface la saisie (Échap)");
            if c.clicked() {
                self.reset(maintenant);
            }

            let copier = ui
                .add_sized([64.0, 28.0], egui::Button::new("Copier"))
                .on_hover_text("Copie le résultat (Enter)");
            if copier.clicked() {
                self.copier_vers_presse_papiers(ui.ctx(), maintenant);
            }
        });
    }

    fn copier_vers_presse_papiers(&mut self, ctx: &egui::Context, maintenant: f64) {
        let texte = self.copier_resultat(maintenant);
        ctx.copy_text(texte);
    }
}
