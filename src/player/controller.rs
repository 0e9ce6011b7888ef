use crate::core::CellSet;

/// AIの指し手選択のtrait
pub trait MoveStrategy {
    /// 手番側と相手の占有マスから次に打つマスを選ぶ。空きマスが無ければ None
    fn select_move(&self, own: CellSet, opponent: CellSet) -> Option<usize>;

    /// 難易度ラベル ("easy" / "medium" / "hard")
    fn level(&self) -> &str;
}
