//! 审核批次状态机
//!
//! AI 或教师批量生成的草稿（题目、课程模块、量规）在落库前逐条审核。
//! 状态机对负载类型泛型化：同一套 pending/approved/rejected 转换服务
//! 所有内容种类，不为每种内容重复实现。批次是临时对象，提交或取消后即被丢弃。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 审核项状态
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

/// 可被审核批次承载的负载
///
/// commit 时通过 `set_order` 把负载的顺序字段重编为连续值；
/// 没有顺序概念的负载保持默认空实现即可。
pub trait ReviewPayload {
    fn set_order(&mut self, _order: i32) {}
}

// 不透明 JSON 草稿：有 "order" 字段才重编号
impl ReviewPayload for serde_json::Value {
    fn set_order(&mut self, order: i32) {
        if let Some(object) = self.as_object_mut()
            && object.contains_key("order")
        {
            object.insert("order".to_string(), serde_json::json!(order));
        }
    }
}

/// 单个审核项
#[derive(Debug, Clone)]
pub struct ReviewItem<P> {
    pub payload: P,
    pub status: ReviewStatus,
}

/// 审核批次
///
/// 状态转换：PENDING -> APPROVED / REJECTED，APPROVED <-> REJECTED 双向可逆；
/// 编辑操作原子地替换负载并将状态置为 APPROVED。
#[derive(Debug, Clone)]
pub struct ReviewBatch<P> {
    items: Vec<ReviewItem<P>>,
}

impl<P: ReviewPayload> ReviewBatch<P> {
    pub fn new(payloads: Vec<P>) -> Self {
        Self {
            items: payloads
                .into_iter()
                .map(|payload| ReviewItem {
                    payload,
                    status: ReviewStatus::Pending,
                })
                .collect(),
        }
    }

    pub fn items(&self) -> &[ReviewItem<P>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn approved_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.status == ReviewStatus::Approved)
            .count()
    }

    /// 通过单项；越界返回 None
    pub fn approve(&mut self, index: usize) -> Option<ReviewStatus> {
        let item = self.items.get_mut(index)?;
        item.status = ReviewStatus::Approved;
        Some(item.status)
    }

    /// 驳回单项；越界返回 None
    pub fn reject(&mut self, index: usize) -> Option<ReviewStatus> {
        let item = self.items.get_mut(index)?;
        item.status = ReviewStatus::Rejected;
        Some(item.status)
    }

    /// 替换负载并直接通过（任何状态均可编辑）
    pub fn edit(&mut self, index: usize, payload: P) -> Option<ReviewStatus> {
        let item = self.items.get_mut(index)?;
        item.payload = payload;
        item.status = ReviewStatus::Approved;
        Some(item.status)
    }

    /// 全部通过，已驳回的条目除外
    pub fn approve_all(&mut self) {
        for item in &mut self.items {
            if item.status != ReviewStatus::Rejected {
                item.status = ReviewStatus::Approved;
            }
        }
    }

    /// 无条件全部驳回，已通过的条目同样被覆盖
    pub fn reject_all(&mut self) {
        for item in &mut self.items {
            item.status = ReviewStatus::Rejected;
        }
    }

    /// 提交批次：剥离审核元数据，按原顺序返回已通过的负载，
    /// 顺序字段重编为连续值。空结果表示整批取消，不是错误。
    pub fn commit(self) -> Vec<P> {
        let mut approved: Vec<P> = self
            .items
            .into_iter()
            .filter(|i| i.status == ReviewStatus::Approved)
            .map(|i| i.payload)
            .collect();

        for (index, payload) in approved.iter_mut().enumerate() {
            payload.set_order(index as i32);
        }

        approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn batch_of(n: usize) -> ReviewBatch<serde_json::Value> {
        ReviewBatch::new(
            (0..n)
                .map(|i| json!({"text": format!("draft {i}"), "order": i}))
                .collect(),
        )
    }

    #[test]
    fn test_items_start_pending() {
        let batch = batch_of(3);
        assert!(
            batch
                .items()
                .iter()
                .all(|i| i.status == ReviewStatus::Pending)
        );
    }

    #[test]
    fn test_approve_reject_are_reversible() {
        let mut batch = batch_of(1);
        assert_eq!(batch.approve(0), Some(ReviewStatus::Approved));
        assert_eq!(batch.reject(0), Some(ReviewStatus::Rejected));
        assert_eq!(batch.approve(0), Some(ReviewStatus::Approved));
    }

    #[test]
    fn test_out_of_range_index_is_none() {
        let mut batch = batch_of(1);
        assert!(batch.approve(5).is_none());
        assert!(batch.reject(5).is_none());
    }

    #[test]
    fn test_approve_all_skips_rejected() {
        let mut batch = batch_of(3);
        batch.reject(1);
        batch.approve_all();

        let statuses: Vec<ReviewStatus> = batch.items().iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![
                ReviewStatus::Approved,
                ReviewStatus::Rejected,
                ReviewStatus::Approved
            ]
        );
    }

    #[test]
    fn test_reject_all_overrides_approved() {
        let mut batch = batch_of(2);
        batch.approve(0);
        batch.reject_all();

        assert!(
            batch
                .items()
                .iter()
                .all(|i| i.status == ReviewStatus::Rejected)
        );
    }

    #[test]
    fn test_reject_all_then_commit_is_empty() {
        let mut batch = batch_of(3);
        batch.approve_all();
        batch.reject_all();
        assert!(batch.commit().is_empty());
    }

    #[test]
    fn test_edit_replaces_payload_and_approves() {
        let mut batch = batch_of(2);
        batch.edit(0, json!({"text": "edited", "order": 0}));
        batch.approve(1);

        let committed = batch.commit();
        assert_eq!(committed[0]["text"], "edited");
    }

    #[test]
    fn test_commit_renumbers_orders_contiguously() {
        let mut batch = batch_of(4);
        batch.approve_all();
        batch.reject(1);

        let committed = batch.commit();
        assert_eq!(committed.len(), 3);
        let orders: Vec<i64> = committed
            .iter()
            .map(|p| p["order"].as_i64().unwrap())
            .collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_commit_leaves_unordered_payloads_alone() {
        let mut batch = ReviewBatch::new(vec![json!({"title": "no order field"})]);
        batch.approve(0);

        let committed = batch.commit();
        assert!(committed[0].get("order").is_none());
    }

    #[test]
    fn test_pending_items_are_not_committed() {
        let mut batch = batch_of(2);
        batch.approve(0);

        let committed = batch.commit();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0]["text"], "draft 0");
    }
}
