//! The fixed questionnaire: 30 Likert items on academic anxiety (factor F1).
//! Order is significant — model parameters are positional over this list.

/// Item identifiers as used in the source study instrument. Display text is
/// derived by replacing underscores with spaces.
pub const ITEMS: [&str; 30] = [
    "F1_conferencias_pienso_conocimiento_burlar",
    "F1expongo_miedo_preguntas_responder",
    "F1participacion_pregunta_no_valida",
    "F1exposicion_pienso_carezco_autoridad",
    "F1dialogo_actividades_excesivamente_argumento",
    "F1social_companeros_burlar_digo",
    "F1exposicion_clase_presentar_tema",
    "F1dialogo_participo_mesas_entender",
    "F1participacion_pensar_companeros_burlan",
    "F1examen_creer_dar_entender",
    "F1equipo_pensar_companeros_evito",
    "F1participacion_pensar_participo_equivocado",
    "F1equipo_pensar_suficiente_opinion",
    "F1equipo_aceptar_conocimientos_examenes",
    "F1participacion_profesor_enojar_participaciones",
    "F1exposicion_platicando_incapaz_atencion",
    "F1conferencias_pienso_preguntas_responder",
    "F1conferecia_miedo_levantar_mano",
    "F1equipo_pienso_evito_ideas",
    "F1examen_miedo_acomodar_palabras",
    "F1conferencias_miedo_publico_charlatan",
    "F1conferencia_publico_miedo_responder",
    "F1social_conversaciones_divertidas_companeros",
    "F1equipo_pienso_conocimientos_integrantes",
    "F1participacion_disminuir_voz_nervios_opinion",
    "F1clase_miedo_mano_participar",
    "F1social_convivo_parte_grupo",
    "F1participacion_companeros_evaluan_negativamente",
    "F1examen_presentar_pienso_estudiado",
    "F1social_platico_miedo_atencion",
];

/// Number of questionnaire items; the feature dimension of the model.
pub const ITEM_COUNT: usize = ITEMS.len();

/// Human-readable prompt for one item.
pub fn display_text(item: &str) -> String {
    item.replace('_', " ")
}
