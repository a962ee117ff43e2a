use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Score at or above which the result counts as "excellent".
pub const RESULT_EXCELLENT: u32 = 5;
/// Score keyed to the "good" result.
pub const RESULT_GOOD: u32 = 4;
/// Score keyed to the "average" result; anything lower shares the fallback.
pub const RESULT_AVERAGE: u32 = 3;

/// Cosmetic transition delays realised by the renderer. The engine itself
/// never sleeps or holds timers.
pub mod timing {
    use super::Duration;

    pub const SCROLL: Duration = Duration::from_millis(100);
    pub const ANIMATION: Duration = Duration::from_millis(10);
    pub const FEEDBACK_SCROLL: Duration = Duration::from_millis(300);
    pub const RESULT_SCROLL: Duration = Duration::from_millis(500);
}

/// One selectable answer within a question. Every option carries its own
/// rationale, shown after it is chosen regardless of correctness.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerOption {
    /// Short display marker, e.g. "A)".
    pub label: String,
    pub text: String,
    pub correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub prompt: String,
    /// Display order is index order; indices are stable identifiers
    /// within the question.
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Index of the single correct option. A record with zero or several
    /// correct options is malformed and yields `DataIntegrity` rather
    /// than an arbitrary pick.
    pub fn correct_index(&self) -> AppResult<usize> {
        let mut correct = None;
        for (index, option) in self.options.iter().enumerate() {
            if option.correct {
                if correct.is_some() {
                    return Err(AppError::DataIntegrity(format!(
                        "question '{}' has more than one correct option",
                        self.prompt
                    )));
                }
                correct = Some(index);
            }
        }

        correct.ok_or_else(|| {
            AppError::DataIntegrity(format!(
                "question '{}' has no correct option",
                self.prompt
            ))
        })
    }
}

/// Per-score result copy shown on the final screen.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreFeedback {
    /// Styling hook consumed by the page, e.g. "resultado-excelente".
    pub category: String,
    pub icon: String,
    pub headline: String,
    pub message: String,
}

/// Score → feedback lookup. Total over all scores: anything without an
/// explicit entry resolves to the fallback.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedbackTable {
    entries: HashMap<u32, ScoreFeedback>,
    fallback: ScoreFeedback,
}

impl FeedbackTable {
    pub fn new(entries: HashMap<u32, ScoreFeedback>, fallback: ScoreFeedback) -> Self {
        FeedbackTable { entries, fallback }
    }

    pub fn feedback_for(&self, score: u32) -> &ScoreFeedback {
        self.entries.get(&score).unwrap_or(&self.fallback)
    }
}

/// Immutable question set plus the scoring table. Read-only for the whole
/// process lifetime; the engine is its only consumer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
    feedback: FeedbackTable,
}

impl QuestionBank {
    /// Fails fast when any question violates the exactly-one-correct
    /// invariant. Banks deserialized straight from data skip this check,
    /// which is why the engine re-validates at selection time.
    pub fn new(questions: Vec<Question>, feedback: FeedbackTable) -> AppResult<Self> {
        for question in &questions {
            question.correct_index()?;
        }
        Ok(QuestionBank { questions, feedback })
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question_at(&self, index: usize) -> AppResult<&Question> {
        self.questions.get(index).ok_or_else(|| {
            AppError::OutOfRange(format!(
                "question index {} outside [0, {})",
                index,
                self.questions.len()
            ))
        })
    }

    pub fn feedback_for(&self, score: u32) -> &ScoreFeedback {
        self.feedback.feedback_for(score)
    }

    /// The built-in content set: five questions on conscious medicine
    /// disposal, as published on the site.
    pub fn medicine_disposal() -> Self {
        QuestionBank {
            questions: medicine_disposal_questions(),
            feedback: medicine_disposal_feedback(),
        }
    }
}

fn option(label: &str, text: &str, correct: bool, explanation: &str) -> AnswerOption {
    AnswerOption {
        label: label.to_string(),
        text: text.to_string(),
        correct,
        explanation: explanation.to_string(),
    }
}

fn medicine_disposal_questions() -> Vec<Question> {
    vec![
        Question {
            prompt: "Onde a maioria das pessoas no Brasil (63%) joga os remédios que não usa mais ou que estão vencidos?".to_string(),
            options: vec![
                option(
                    "A)",
                    "No lixo reciclável, junto com o papel e o plástico.",
                    false,
                    "Apenas 5% descartam no lixo reciclável. Essa prática não é correta, pois os medicamentos contaminam os materiais que seriam reaproveitados.",
                ),
                option(
                    "B)",
                    "No vaso sanitário ou na pia (descarte no esgoto).",
                    false,
                    "Descartar no esgoto (pia ou vaso) é feito por 8% das pessoas e é muito perigoso, pois os resíduos poluem os rios e mananciais, mesmo após o tratamento.",
                ),
                option(
                    "C)",
                    "No lixo comum, incluindo o lixo da cozinha e o lixo de banheiro.",
                    true,
                    "Infelizmente, 63% dos brasileiros jogam os medicamentos no lixo comum. Essa é a forma de descarte incorreto mais comum e a que mais expõe pessoas, animais e o meio ambiente a riscos de contaminação.",
                ),
                option(
                    "D)",
                    "Guardam no armário e não descartam.",
                    false,
                    "Não descartar medicamentos vencidos ou em desuso no local correto prolonga o risco de acidentes e contaminação dentro de casa.",
                ),
            ],
        },
        Question {
            prompt: "Qual é o maior perigo de jogar os remédios vencidos no lixo de casa ou na privada (esgoto)?".to_string(),
            options: vec![
                option(
                    "A)",
                    "O farmacêutico não consegue saber se o remédio foi usado corretamente.",
                    false,
                    "O controle do farmacêutico é importante, mas o maior risco do descarte incorreto não é esse.",
                ),
                option(
                    "B)",
                    "O lixo fica mais pesado para o caminhão da coleta.",
                    false,
                    "O peso do lixo não é a principal preocupação ambiental.",
                ),
                option(
                    "C)",
                    "O remédio vai para os postos de saúde e contamina outros pacientes.",
                    false,
                    "O resíduo descartado de forma errada vai para o meio ambiente ou aterros, e não para os postos de saúde.",
                ),
                option(
                    "D)",
                    "Contaminação grave da água (lençol freático e rios) e do solo.",
                    true,
                    "Jogar medicamentos fora de forma incorreta causa poluição do solo, do lençol freático e da atmosfera, e os resíduos químicos podem permanecer nos rios mesmo depois do tratamento de esgoto, expondo pessoas e animais a riscos de contaminação.",
                ),
            ],
        },
        Question {
            prompt: "Para onde devemos levar os remédios vencidos, os restinhos de xarope ou as cartelas de comprimidos que sobraram?".to_string(),
            options: vec![
                option(
                    "A)",
                    "Devemos enterrar no quintal ou no mato.",
                    false,
                    "Descartar em terra, no quintal ou no mato, é uma prática incorreta feita por 1% dos brasileiros e contamina diretamente o solo.",
                ),
                option(
                    "B)",
                    "Para os postos de coleta que ficam nas farmácias, drogarias ou unidades de saúde.",
                    true,
                    "O sistema de Logística Reversa, regulamentado em 2020, exige que os consumidores levem os medicamentos vencidos ou em desuso aos pontos de coleta específicos, localizados em farmácias, drogarias ou unidades de saúde. Estes locais têm coletores adequados para o descarte seguro.",
                ),
                option(
                    "C)",
                    "Devemos queimar os medicamentos para que eles sumam.",
                    false,
                    "Queimar ou descartar em cinereira (feito por 1%) também é incorreto e polui a atmosfera.",
                ),
                option(
                    "D)",
                    "Podemos misturar com o lixo orgânico para que o lixeiro recolha.",
                    false,
                    "O lixo orgânico faz parte do lixo comum. É a forma mais comum de descarte incorreto (63%) e causa contaminação ambiental.",
                ),
            ],
        },
        Question {
            prompt: "Quando levamos os remédios para o posto de coleta na farmácia, como devemos prepará-los?".to_string(),
            options: vec![
                option(
                    "A)",
                    "Devemos tirar os comprimidos de dentro das cartelas (blisters) e colocar todos em um saco plástico.",
                    false,
                    "O consumidor deve levar os produtos de volta aos estabelecimentos da forma que estão, sem retirar dos blisters ou frascos.",
                ),
                option(
                    "B)",
                    "Devemos misturar os restos de xaropes com água antes de jogar fora.",
                    false,
                    "Não devemos manipular ou diluir os medicamentos que serão descartados.",
                ),
                option(
                    "C)",
                    "Devemos levar os produtos da forma que estão, dentro de seus frascos ou cartelas originais.",
                    true,
                    "O farmacêutico orienta que o consumidor leve os resíduos da forma que estão, para evitar a manipulação e a contaminação. Somente as caixas de papelão e as bulas (embalagens que não tiveram contato com o medicamento) podem ser colocadas para reciclagem em casa.",
                ),
                option(
                    "D)",
                    "Devemos levar apenas a caixa de papelão, pois é o que a farmácia precisa.",
                    false,
                    "As caixas de papelão e bulas podem ser recicladas em casa, mas o medicamento em si (comprimido, xarope, frasco) e suas embalagens primárias (blisters, vidros) devem ir para o coletor da farmácia.",
                ),
            ],
        },
        Question {
            prompt: "Qual é a primeira atitude que o consumidor pode tomar para diminuir o problema do descarte incorreto de medicamentos?".to_string(),
            options: vec![
                option(
                    "A)",
                    "Juntar todos os remédios e só descartar uma vez por ano.",
                    false,
                    "Guardar os medicamentos por muito tempo aumenta o risco em casa.",
                ),
                option(
                    "B)",
                    "Evitar sobras de medicamentos, adquirindo somente a quantidade necessária para o tratamento.",
                    true,
                    "A primeira orientação para fazer o certo é justamente evitar sobras de medicamentos, adquirindo somente o necessário para o tratamento prescrito. Isso diminui o volume de resíduos que precisa ser descartado na logística reversa.",
                ),
                option(
                    "C)",
                    "Pedir ajuda ao vizinho para descartar o que sobrou.",
                    false,
                    "O dever de descarte é do consumidor e deve ser feito nos postos adequados.",
                ),
                option(
                    "D)",
                    "Levar todos os remédios da casa para o posto de coleta de uma só vez, mesmo que não estejam vencidos.",
                    false,
                    "O descarte deve ser feito quando o medicamento está vencido ou em desuso. O uso racional (comprar só o necessário) deve ser incentivado.",
                ),
            ],
        },
    ]
}

fn medicine_disposal_feedback() -> FeedbackTable {
    let mut entries = HashMap::new();
    entries.insert(
        RESULT_EXCELLENT,
        ScoreFeedback {
            category: "resultado-excelente".to_string(),
            icon: "🏆".to_string(),
            headline: "Parabéns! Você é um Expert!".to_string(),
            message: "Você acertou todas as perguntas! Seu conhecimento sobre descarte consciente de medicamentos é excelente. Continue cuidando bem da sua saúde e do meio ambiente!".to_string(),
        },
    );
    entries.insert(
        RESULT_GOOD,
        ScoreFeedback {
            category: "resultado-bom".to_string(),
            icon: "🌟".to_string(),
            headline: "Muito Bem! Ótimo Desempenho!".to_string(),
            message: "Você acertou quase todas as perguntas! Seu conhecimento é muito bom. Continue assim e revise os pontos que ainda têm dúvidas.".to_string(),
        },
    );
    entries.insert(
        RESULT_AVERAGE,
        ScoreFeedback {
            category: "resultado-medio".to_string(),
            icon: "💪".to_string(),
            headline: "Ei, você pode melhorar!".to_string(),
            message: "Você acertou a maioria das perguntas, mas ainda há espaço para aprender mais. Que tal rever o conteúdo e tentar novamente?".to_string(),
        },
    );

    FeedbackTable::new(
        entries,
        ScoreFeedback {
            category: "resultado-baixo".to_string(),
            icon: "📚".to_string(),
            headline: "Ei, tente novamente!".to_string(),
            message: "Não desanime! O aprendizado leva tempo. Que tal revisar o conteúdo com calma e tentar de novo? Você vai se sair melhor!".to_string(),
        },
    )
}
